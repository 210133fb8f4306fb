//! Data models shared between the API, services and repository layers

pub mod ad;
pub mod home;
pub mod knowledge;
pub mod lead;
pub mod member;
pub mod partner;
pub mod plan;
pub mod promotion;
pub mod testimonial;
pub mod user;
