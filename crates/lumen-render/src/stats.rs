/// Per-session counters of a batch, reset on every `begin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Primitives accepted by `draw`.
    pub draws: u32,
    /// Backend submissions issued.
    pub flushes: u32,
    /// Vertices handed to the backend across all submissions.
    pub vertices_submitted: u32,
    /// Deferred texture re-uploads triggered by dirty textures.
    pub texture_uploads: u32,
}

impl BatchStats {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
