//! Page components, one per route.

mod community;
mod create_story;
mod dashboard;
mod landing;
mod my_stories;

pub use community::CommunityPage;
pub use create_story::CreateStory;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use my_stories::MyStories;
