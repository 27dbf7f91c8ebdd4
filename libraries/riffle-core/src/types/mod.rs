mod ids;
mod kind;
mod track;
mod user;

pub use ids::{NotificationId, TrackId, UserId};
pub use kind::NotificationKind;
pub use track::{Track, TrackRef};
pub use user::UserRef;
