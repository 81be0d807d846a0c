pub mod profile;
pub mod response;
pub mod result;
pub mod scale;
