use metrics::{IntoLabels, Label, SharedString};

/// Holder of multiple [Label] providing some methods to easily clone and adds new labels in it.
///
/// Verifiers take caller labels (tenant, deployment, ...) at construction and
/// every `gstin.verification.*` counter carries them; the request counter
/// appends its `outcome` label on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }

    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_clone_labels() {
        let labels = Labels::new(&[("tenant", "acme")]);

        let labels_2 = labels.clone_with_labels(&[("outcome", "active")]);
        let label_list = labels_2.into_labels();
        assert!(label_list.contains(&Label::new("tenant", "acme")));
        assert!(label_list.contains(&Label::new("outcome", "active")));

        let labels_3 =
            labels.clone_with_labels(&[("outcome", "inactive"), ("provider", "appyflow")]);
        let label_list = labels_3.into_labels();
        assert!(label_list.contains(&Label::new("tenant", "acme")));
        assert!(!label_list.contains(&Label::new("outcome", "active")));
        assert!(label_list.contains(&Label::new("outcome", "inactive")));
        assert!(label_list.contains(&Label::new("provider", "appyflow")));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Labels::default().into_labels().is_empty());
    }
}
