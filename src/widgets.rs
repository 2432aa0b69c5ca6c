//! Small layout helpers shared by the render modules

pub mod popup;
