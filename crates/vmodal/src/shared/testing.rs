//! In-memory stand-ins for the DOM, timers and page layout.

use contracts::modal::classes::container_variant;
use contracts::modal::{FooterOptions, ModalCallback};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use super::modal::lifecycle::CloseTrigger;
use super::modal::surface::ModalSurface;
use super::modal::timer::{PendingTask, Scheduler};
use super::scroll_lock::PageLayout;

#[derive(Default)]
pub struct SurfaceLog {
    pub classes: BTreeSet<String>,
    pub container_classes: BTreeSet<String>,
    pub title: String,
    pub body: String,
    pub footer: Option<Vec<(String, Option<ModalCallback>)>>,
    pub footer_class: String,
    pub centered: bool,
    pub attached: bool,
    pub trigger: Option<CloseTrigger>,
}

/// Surface that records every mutation for later inspection.
#[derive(Clone)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        let log = SurfaceLog {
            attached: true,
            ..Default::default()
        };
        Self {
            log: Rc::new(RefCell::new(log)),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.log.borrow().classes.contains(class)
    }

    /// Root classes, sorted.
    pub fn classes(&self) -> Vec<String> {
        self.log.borrow().classes.iter().cloned().collect()
    }

    pub fn container_has_class(&self, class: &str) -> bool {
        self.log.borrow().container_classes.contains(class)
    }

    pub fn body(&self) -> String {
        self.log.borrow().body.clone()
    }

    pub fn title(&self) -> String {
        self.log.borrow().title.clone()
    }

    pub fn footer_labels(&self) -> Option<Vec<String>> {
        self.log
            .borrow()
            .footer
            .as_ref()
            .map(|buttons| buttons.iter().map(|(text, _)| text.clone()).collect())
    }

    pub fn footer_class(&self) -> String {
        self.log.borrow().footer_class.clone()
    }

    pub fn is_centered(&self) -> bool {
        self.log.borrow().centered
    }

    pub fn is_attached(&self) -> bool {
        self.log.borrow().attached
    }

    pub fn has_close_trigger(&self) -> bool {
        self.log.borrow().trigger.is_some()
    }

    /// Simulates a click on an element flagged as a close control.
    pub fn click_close_control(&self) {
        let trigger = self.log.borrow().trigger.clone();
        if let Some(trigger) = trigger {
            trigger.fire();
        }
    }

    pub fn click_button(&self, label: &str) {
        let handler = self.log.borrow().footer.as_ref().and_then(|buttons| {
            buttons
                .iter()
                .find(|(text, _)| text == label)
                .and_then(|(_, handler)| handler.clone())
        });
        if let Some(handler) = handler {
            handler.run();
        }
    }

    pub fn with_container_class(self, class: &str) -> Self {
        self.log
            .borrow_mut()
            .container_classes
            .insert(class.to_string());
        self
    }
}

impl ModalSurface for RecordingSurface {
    fn add_class(&mut self, class: &str) {
        self.log.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.log.borrow_mut().classes.remove(class);
    }

    fn set_title(&mut self, markup: &str) {
        self.log.borrow_mut().title = markup.to_string();
    }

    fn set_body(&mut self, markup: &str) {
        self.log.borrow_mut().body = markup.to_string();
    }

    fn render_footer(&mut self, footer: &FooterOptions) {
        let mut log = self.log.borrow_mut();
        log.footer = Some(
            footer
                .buttons
                .iter()
                .map(|b| (b.text.clone(), b.handler.clone()))
                .collect(),
        );
        log.footer_class = footer.add_class.clone();
    }

    fn remove_footer(&mut self) {
        self.log.borrow_mut().footer = None;
    }

    fn swap_container_transition(&mut self, previous: &str, next: &str) {
        let mut log = self.log.borrow_mut();
        if !previous.is_empty() {
            log.container_classes.remove(&container_variant(previous));
        }
        if !next.is_empty() {
            log.container_classes.insert(container_variant(next));
        }
    }

    fn set_centered(&mut self, centered: bool) {
        self.log.borrow_mut().centered = centered;
    }

    fn bind_close_trigger(&mut self, trigger: CloseTrigger) {
        self.log.borrow_mut().trigger = Some(trigger);
    }

    fn detach(&mut self) {
        let mut log = self.log.borrow_mut();
        log.attached = false;
        log.trigger = None;
        log.footer = None;
    }
}

struct Scheduled {
    id: u64,
    due: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    tasks: Vec<Scheduled>,
}

struct TaskGuard {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.tasks.retain(|t| t.id != self.id);
            }
        }
    }
}

/// Scheduler driven by a virtual clock; tasks run only inside [`advance`].
///
/// [`advance`]: ManualScheduler::advance
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    /// Moves the clock forward, running due tasks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let index = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                index.map(|i| {
                    let task = clock.tasks.remove(i);
                    clock.now = task.due;
                    task.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> PendingTask {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay_ms as u64;
        clock.tasks.push(Scheduled { id, due, task });
        PendingTask::new(TaskGuard {
            id,
            clock: Rc::downgrade(&self.clock),
        })
    }
}

struct PageState {
    overflows: bool,
    /// Inline `padding-right`.
    padding: String,
    /// `padding-right` coming from stylesheets.
    stylesheet_padding: String,
    overflow_y: String,
    scrollbar_width: f64,
    measurements: usize,
}

/// Page layout kept in memory.
#[derive(Clone)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
}

impl FakePage {
    fn with(overflows: bool, padding: &str, scrollbar_width: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState {
                overflows,
                padding: padding.to_string(),
                stylesheet_padding: String::new(),
                overflow_y: String::new(),
                scrollbar_width,
                measurements: 0,
            })),
        }
    }

    /// A page taller than the viewport, showing a scrollbar.
    pub fn overflowing(padding: &str, scrollbar_width: f64) -> Self {
        Self::with(true, padding, scrollbar_width)
    }

    pub fn fitting(padding: &str) -> Self {
        Self::with(false, padding, 17.0)
    }

    pub fn with_stylesheet_padding(self, padding: &str) -> Self {
        self.state.borrow_mut().stylesheet_padding = padding.to_string();
        self
    }

    pub fn with_overflow_y(self, overflow: &str) -> Self {
        self.state.borrow_mut().overflow_y = overflow.to_string();
        self
    }

    /// Inline padding.
    pub fn padding(&self) -> String {
        self.state.borrow().padding.clone()
    }

    /// Padding after the cascade: inline wins over the stylesheet.
    pub fn effective_padding(&self) -> String {
        let state = self.state.borrow();
        if state.padding.is_empty() {
            state.stylesheet_padding.clone()
        } else {
            state.padding.clone()
        }
    }

    pub fn overflow(&self) -> String {
        self.state.borrow().overflow_y.clone()
    }

    pub fn scroll_suppressed(&self) -> bool {
        self.state.borrow().overflow_y == "hidden"
    }

    pub fn measurements(&self) -> usize {
        self.state.borrow().measurements
    }
}

impl PageLayout for FakePage {
    fn page_overflows(&self) -> bool {
        self.state.borrow().overflows
    }

    fn padding_right(&self) -> String {
        self.state.borrow().padding.clone()
    }

    fn computed_padding_right(&self) -> String {
        self.effective_padding()
    }

    fn set_padding_right(&mut self, value: &str) {
        self.state.borrow_mut().padding = value.to_string();
    }

    fn overflow_y(&self) -> String {
        self.state.borrow().overflow_y.clone()
    }

    fn set_overflow_y(&mut self, value: &str) {
        self.state.borrow_mut().overflow_y = value.to_string();
    }

    fn measure_scrollbar_width(&self) -> f64 {
        let mut state = self.state.borrow_mut();
        state.measurements += 1;
        state.scrollbar_width
    }
}
