//! Social events and the in-process event bus
//!
//! Domain actions elsewhere in the client (liking, following, messaging,
//! uploading) publish a [`SocialEvent`]; engines subscribe by [`EventKind`].
//!
//! ```text
//! Publishers (UI actions):           Subscribers (per kind):
//!   like button   ──┐
//!   follow button ──┼──► EventBus::publish ──► validate ──► on_event(&event)
//!   composer      ──┤        (synchronous fan-out, subscription order)
//!   uploader      ──┘
//! ```
//!
//! - [`event`]: event definitions (`SocialEvent`, `EventKind`)
//! - [`bus`]: `EventBus`, `Subscriber`, `SubscriptionId`

pub mod bus;
pub mod event;

pub use bus::{EventBus, Subscriber, SubscriptionId};
pub use event::{EventKind, SocialEvent};
