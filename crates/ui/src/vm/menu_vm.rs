use quiz_core::model::{CategoryFilter, QuestionStore, QuizMode};

/// One entry of the category `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptionVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Menu entries: "All questions" first, then every stored category ascending by key.
/// Categories missing from the catalog are labeled by their key.
#[must_use]
pub fn category_options(store: &QuestionStore, selected: &CategoryFilter) -> Vec<CategoryOptionVm> {
    let catalog = store.catalog();
    let all = CategoryFilter::All;
    let mut options = vec![CategoryOptionVm {
        value: all.as_key().to_string(),
        label: format!("{} ({})", catalog.label_for(&all), store.count(&all)),
        selected: *selected == all,
    }];

    for key in store.categories() {
        let filter = CategoryFilter::Only(key.clone());
        options.push(CategoryOptionVm {
            value: key.as_str().to_string(),
            label: format!("{} ({})", catalog.label_for(&filter), store.count(&filter)),
            selected: *selected == filter,
        });
    }
    options
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTabVm {
    pub mode: QuizMode,
    pub label: &'static str,
    pub active: bool,
}

impl ModeTabVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active { "tab tab--active" } else { "tab" }
    }
}

#[must_use]
pub fn mode_tabs(current: QuizMode) -> [ModeTabVm; 2] {
    [
        ModeTabVm {
            mode: QuizMode::Browse,
            label: "Question list",
            active: current == QuizMode::Browse,
        },
        ModeTabVm {
            mode: QuizMode::Quiz,
            label: "Quiz",
            active: current == QuizMode::Quiz,
        },
    ]
}
