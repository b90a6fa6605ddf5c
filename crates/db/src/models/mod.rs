pub mod campground;
