mod favorite;
mod movie;
mod user;

pub use favorite::Favorite;
pub use movie::{Movie, NewMovie};
pub use user::{Credentials, NewUser, User};
