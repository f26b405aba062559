pub mod password;

pub mod user_service;
pub mod user_service_impl;
pub use user_service::{RegisterUser, UserError, UserService};
pub use user_service_impl::SeaOrmUserService;

pub mod post_service;
pub mod post_service_impl;
pub use post_service::{CreatePost, PostError, PostService};
pub use post_service_impl::SeaOrmPostService;
