pub mod copy;
pub mod fav;
pub mod image;
pub mod quote;
pub mod share;
