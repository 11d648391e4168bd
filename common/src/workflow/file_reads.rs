use crate::model::document::DocumentKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    generation: u64,
    loading: bool,
}

/// Tracks in-flight file reads per input so only the latest pick lands in the form.
///
/// Each pick (or clear) starts a new generation; a read that finishes for an
/// older generation is discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReads {
    passport: Slot,
    photo: Slot,
}

impl FileReads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts reading a newly picked file and returns its generation.
    pub fn begin(&mut self, kind: DocumentKind) -> u64 {
        let slot = self.slot_mut(kind);
        slot.generation += 1;
        slot.loading = true;
        slot.generation
    }

    /// The input was cleared; any read still running for it is stale.
    pub fn clear(&mut self, kind: DocumentKind) {
        let slot = self.slot_mut(kind);
        slot.generation += 1;
        slot.loading = false;
    }

    /// Returns whether a finished read is the latest one for its input.
    pub fn finish(&mut self, kind: DocumentKind, generation: u64) -> bool {
        let slot = self.slot_mut(kind);
        if slot.generation != generation {
            return false;
        }
        slot.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.passport.loading || self.photo.loading
    }

    fn slot_mut(&mut self, kind: DocumentKind) -> &mut Slot {
        match kind {
            DocumentKind::Passport => &mut self.passport,
            DocumentKind::Photo => &mut self.photo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slower_earlier_read_is_discarded() {
        let mut reads = FileReads::new();
        let first = reads.begin(DocumentKind::Passport);
        let second = reads.begin(DocumentKind::Passport);

        assert!(reads.finish(DocumentKind::Passport, second));
        assert!(!reads.is_loading());
        assert!(!reads.finish(DocumentKind::Passport, first));
    }

    #[test]
    fn stale_read_keeps_latest_pending() {
        let mut reads = FileReads::new();
        let first = reads.begin(DocumentKind::Passport);
        let _second = reads.begin(DocumentKind::Passport);

        assert!(!reads.finish(DocumentKind::Passport, first));
        assert!(reads.is_loading());
    }

    #[test]
    fn clearing_the_input_drops_the_running_read() {
        let mut reads = FileReads::new();
        let pending = reads.begin(DocumentKind::Photo);

        reads.clear(DocumentKind::Photo);

        assert!(!reads.is_loading());
        assert!(!reads.finish(DocumentKind::Photo, pending));
    }

    #[test]
    fn inputs_are_tracked_separately() {
        let mut reads = FileReads::new();
        let passport = reads.begin(DocumentKind::Passport);
        let photo = reads.begin(DocumentKind::Photo);

        assert!(reads.finish(DocumentKind::Photo, photo));
        assert!(reads.is_loading());
        assert!(reads.finish(DocumentKind::Passport, passport));
        assert!(!reads.is_loading());
    }
}
