pub mod basics;
pub mod comps;
pub mod economy;
pub mod home;
pub mod positioning;
