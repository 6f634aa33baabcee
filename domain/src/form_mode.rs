/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<T> {
    Add,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            FormMode::Add => None,
            FormMode::Edit(record) => Some(record),
        }
    }

    /// Modal heading, e.g. "Add Product" / "Edit Product"
    pub fn title(&self, noun: &str) -> String {
        match self {
            FormMode::Add => format!("Add {}", noun),
            FormMode::Edit(_) => format!("Edit {}", noun),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Create",
            FormMode::Edit(_) => "Save changes",
        }
    }
}

impl<T> Default for FormMode<T> {
    fn default() -> Self {
        FormMode::Add
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_mode() {
        let add: FormMode<u32> = FormMode::Add;
        let edit = FormMode::Edit(5u32);

        assert_eq!(add.title("Brand"), "Add Brand");
        assert_eq!(edit.title("Brand"), "Edit Brand");
        assert_eq!(add.submit_label(), "Create");
        assert_eq!(edit.record(), Some(&5));
        assert!(!add.is_edit());
    }
}
