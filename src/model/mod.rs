mod content;
mod fragment;
mod target;

pub use content::{Block, Content, ContentNode, ContentRegion, Download};
pub use fragment::{fragment_text, parse_fragment};
pub use target::{default_targets, NavigationTarget, TargetId, TargetList};
