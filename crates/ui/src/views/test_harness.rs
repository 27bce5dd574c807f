use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use keyboard_types::Key;
use quiz_core::model::{QuestionDraft, QuestionId, QuestionStore};
use quiz_core::time::fixed_clock;
use services::{QuizSession, SessionOptions, Transition};
use storage::{InMemorySource, QuestionSource};

use super::QuizView;
use super::quiz::{QuizTestHandles, apply_shortcut};
use crate::context::{UiApp, build_app_context};
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    store: Arc<QuestionStore>,
    options: SessionOptions,
}

impl UiApp for TestApp {
    fn question_store(&self) -> Arc<QuestionStore> {
        Arc::clone(&self.store)
    }

    fn session_options(&self) -> SessionOptions {
        self.options.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let _ = self.try_dispatch(intent);
    }

    pub fn try_dispatch(&mut self, intent: QuizIntent) -> Transition {
        let dispatch = self.handles.dispatch();
        let transition = self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
        transition
    }

    /// Returns whether the view would cancel the key's default action.
    pub fn press(&mut self, key: Key) -> bool {
        let dispatch = self.handles.dispatch();
        let mode = self.with_session(QuizSession::mode);
        let handled = self.dom.in_runtime(|| apply_shortcut(mode, &key, dispatch));
        drive_dom(&mut self.dom);
        handled
    }

    /// Read the live session owned by the view.
    pub fn with_session<T>(&self, f: impl FnOnce(&QuizSession) -> T) -> T {
        let session = self.handles.session();
        self.dom.in_runtime(|| f(&*session.read()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn draft(id: u64, category: &str, prompt: &str, correct_index: usize) -> QuestionDraft {
    QuestionDraft {
        id: QuestionId::new(id),
        category: category.into(),
        prompt: prompt.into(),
        options: vec!["Alpha".into(), "Bravo".into(), "Charlie".into(), "Delta".into()],
        correct_index,
    }
}

/// Three questions: two networking, one databases.
pub fn sample_store() -> Arc<QuestionStore> {
    let store = InMemorySource::new()
        .with_category("database", "Databases")
        .with_category("network", "Networking")
        .with_question(draft(1, "network", "Which layer routes **packets**?", 1))
        .with_question(draft(2, "database", "Which clause filters `GROUP BY` output?", 2))
        .with_question(draft(3, "network", "Which protocol is connection-oriented?", 3))
        .load()
        .expect("sample store");
    Arc::new(store)
}

pub fn setup_view_harness(options: SessionOptions) -> ViewHarness {
    let options = SessionOptions {
        clock: fixed_clock(),
        ..options
    };
    let app = Arc::new(TestApp {
        store: sample_store(),
        options,
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
