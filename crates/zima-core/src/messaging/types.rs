/// Options for an outgoing message.
#[derive(Clone, Copy, Debug, Default)]
pub struct SendOptions {
    /// Suppress the client-side link preview. Listings set this so a wall
    /// of collected links does not expand into a wall of previews.
    pub disable_link_preview: bool,
}

impl SendOptions {
    pub fn no_preview() -> Self {
        Self {
            disable_link_preview: true,
        }
    }
}
