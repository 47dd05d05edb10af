//! Staging area for properties assigned before the first attach.

/// Property values recorded on an instance that has not been upgraded yet.
///
/// Each field holds the last value assigned to the corresponding property.
/// On the first attach the switch takes the whole set and replays it through
/// its setters in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingProperties {
    /// Staged `state`.
    pub state: Option<String>,
    /// Staged `disabled`.
    pub disabled: Option<bool>,
    /// Staged `elastic`.
    pub elastic: Option<bool>,
    /// Staged `onLabel`.
    pub on_label: Option<String>,
    /// Staged `offLabel`.
    pub off_label: Option<String>,
}

impl PendingProperties {
    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of staged properties.
    pub fn len(&self) -> usize {
        [
            self.state.is_some(),
            self.disabled.is_some(),
            self.elastic.is_some(),
            self.on_label.is_some(),
            self.off_label.is_some(),
        ]
        .into_iter()
        .filter(|staged| *staged)
        .count()
    }

    /// Take every staged value, leaving the area empty.
    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_empties() {
        let mut pending = PendingProperties {
            disabled: Some(true),
            on_label: Some("Yes".into()),
            ..Default::default()
        };
        assert_eq!(pending.len(), 2);

        let taken = pending.take();
        assert!(pending.is_empty());
        assert_eq!(taken.disabled, Some(true));
        assert_eq!(taken.on_label.as_deref(), Some("Yes"));
    }
}
