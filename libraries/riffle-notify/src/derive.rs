//! Event → notification derivation
//!
//! Each rule only fires for the signed-in user; an anonymous session derives
//! nothing.
//!
//! | Event            | Fires when                                    | Kind          |
//! |------------------|-----------------------------------------------|---------------|
//! | `TrackLiked`     | owner is current user and liker is not owner   | `Like`        |
//! | `NewFollower`    | followed user is current user                  | `Follow`      |
//! | `NewMessage`     | recipient is current user                      | `Message`     |
//! | `TrackUploaded`  | current user is among the uploader's followers | `TrackUpload` |

use riffle_core::{FeedSettings, NotificationKind, Session, SocialEvent};

use crate::notification::NotificationDraft;

/// Draft the notification `event` produces for `session`, if any
pub fn draft_for(session: &Session, event: &SocialEvent, settings: &FeedSettings) -> Option<NotificationDraft> {
    let user = session.user_id()?;

    match event {
        SocialEvent::TrackLiked { track, liker } => {
            if liker.id == track.owner_id || &track.owner_id != user {
                return None;
            }
            Some(
                NotificationDraft::new(
                    NotificationKind::Like,
                    "New Like",
                    format!("{} liked your track \"{}\"", liker.name, track.title),
                )
                .by_user(liker.clone())
                .for_track(track.id.clone()),
            )
        }

        SocialEvent::NewFollower {
            follower,
            followed_id,
        } => {
            if followed_id != user {
                return None;
            }
            Some(
                NotificationDraft::new(
                    NotificationKind::Follow,
                    "New Follower",
                    format!("{} started following you", follower.name),
                )
                .by_user(follower.clone()),
            )
        }

        SocialEvent::NewMessage {
            sender,
            recipient_id,
            content,
        } => {
            if recipient_id != user {
                return None;
            }
            Some(
                NotificationDraft::new(
                    NotificationKind::Message,
                    "New Message",
                    format!(
                        "{}: {}",
                        sender.name,
                        preview(content, settings.message_preview_chars)
                    ),
                )
                .by_user(sender.clone()),
            )
        }

        SocialEvent::TrackUploaded {
            track,
            uploader,
            follower_ids,
        } => {
            if !follower_ids.contains(user) {
                return None;
            }
            Some(
                NotificationDraft::new(
                    NotificationKind::TrackUpload,
                    "New Track",
                    format!("{} uploaded \"{}\"", uploader.name, track.title),
                )
                .by_user(uploader.clone())
                .for_track(track.id.clone()),
            )
        }
    }
}

/// First `max_chars` characters of `content`, with `...` when cut
pub fn preview(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
