use snakepit_core_contact_impl::{handler::LogContactSubmissionHandler, ContactFeatureServiceImpl};
use snakepit_core_snake_impl::{snake::SnakeServiceImpl, SnakeFeatureServiceImpl};
use snakepit_shared_impl::id::IdServiceImpl;

// Shared
pub type Id = IdServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<ContactSubmissionHandler>;
pub type ContactSubmissionHandler = LogContactSubmissionHandler;

pub type SnakeFeature = SnakeFeatureServiceImpl<SnakeCrud>;
pub type SnakeCrud = SnakeServiceImpl<Id>;
