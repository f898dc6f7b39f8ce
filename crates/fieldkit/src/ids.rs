use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::InputKind;

/// Source of element ids for a render call
///
/// `group_id` is called once per rendered input and links the input to its
/// label (for radio groups it becomes the shared `name`). `option_id` is
/// called once per radio option.
pub trait IdSource {
    /// Id for one rendered input
    fn group_id(&mut self, kind: InputKind) -> String;

    /// Id for one radio option
    fn option_id(&mut self) -> String;
}

/// Collision-resistant ids: `<kind>-<unix millis>-<uuid v4>` for inputs,
/// a bare uuid v4 for radio options.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn group_id(&mut self, kind: InputKind) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!("{}-{}-{}", kind, millis, Uuid::new_v4())
    }

    fn option_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids (`input-1`, `option-2`, ...) for reproducible output
///
/// Unique only within one `SequentialIds` value.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start counting from 1
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl IdSource for SequentialIds {
    fn group_id(&mut self, kind: InputKind) -> String {
        format!("{}-{}", kind, self.bump())
    }

    fn option_id(&mut self) -> String {
        format!("option-{}", self.bump())
    }
}
