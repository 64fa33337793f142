pub mod landing_page;
pub mod experts_page;
