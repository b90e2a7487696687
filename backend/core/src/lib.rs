pub mod error;
pub mod interaction;
pub mod payload;

pub use error::GatewayError;
pub use interaction::{Interaction, InteractionKind, MessageRef, RequestMeta, ORIGINAL_MESSAGE};
pub use payload::{Embed, EmbedField, EmbedFooter, InteractionCallback, MessagePayload};
