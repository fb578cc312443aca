use super::*;
use crate::provider::{DataProvider, Page, PageErrorMsg, PageMsg, PageRequest, ProviderError};
use crate::scrollbar::{ScrollInit, ScrollSync};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::{Arc, Mutex};

fn sample() -> Model<i32> {
    Model::new(vec![10, 20, 30, 40, 50, 60, 70], 3)
}

fn contents(list: &Model<i32>) -> Vec<String> {
    (0..list.size())
        .filter_map(|slot| list.slot(slot))
        .map(|slot| slot.content.clone())
        .collect()
}

fn key(code: KeyCode) -> Box<KeyMsg> {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
fn new_renders_first_window_without_focus() {
    let list = sample();

    assert_eq!(list.len(), 7);
    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.focused_slot(), None);
    assert_eq!(contents(&list), vec!["10", "20", "30"]);
    assert_eq!(list.slot(0).and_then(|s| s.index), Some(0));
    assert_eq!(list.slot(2).and_then(|s| s.index), Some(2));
}

#[test]
fn window_rebuild_reports_move_and_last_slot_selection() {
    let mut list = sample();
    let events = list.take_events();

    assert!(events.contains(&Event::WindowMoved {
        prev: None,
        curr: 0
    }));
    assert!(events.contains(&Event::Selection { slot: 2 }));
}

#[test]
fn render_view_at_current_position_is_a_noop() {
    let mut list = sample();
    list.take_events();

    assert!(!list.render_view(0));
    assert!(list.take_events().is_empty());
}

#[test]
fn window_past_the_end_renders_stubs() {
    let mut list = sample();

    assert!(list.render_view(10));
    assert_eq!(list.view_index(), Some(10));
    for slot in 0..list.size() {
        let slot = list.slot(slot).unwrap();
        assert!(!slot.is_bound());
        assert!(slot.content.is_empty());
    }
}

#[test]
fn window_overlapping_the_end_renders_a_stub_tail() {
    let mut list = sample();
    list.render_view(5);

    assert_eq!(list.slot(0).and_then(|s| s.index), Some(5));
    assert_eq!(list.slot(1).and_then(|s| s.index), Some(6));
    assert!(!list.slot(2).unwrap().is_bound());
}

#[test]
fn focus_walks_within_window_then_slides_it() {
    let mut list = sample();
    list.focus_index(0);
    list.take_events();

    list.navigate(Direction::Down);
    assert_eq!(list.focused_slot(), Some(1));
    assert_eq!(list.view_index(), Some(0));

    list.navigate(Direction::Down);
    assert_eq!(list.focused_slot(), Some(2));
    assert_eq!(list.view_index(), Some(0));

    // The focus sits on the last slot now; the next step shifts the
    // window under it instead of moving the focus.
    list.navigate(Direction::Down);
    assert_eq!(list.focused_slot(), Some(2));
    assert_eq!(list.view_index(), Some(1));
    assert_eq!(list.focused_index(), Some(3));
    assert_eq!(list.selected_item().map(|i| i.value), Some(40));
}

#[test]
fn focus_index_is_idempotent() {
    let mut list = sample();

    // Out-of-window target: the first call shifts the window.
    list.focus_index(5);
    assert_eq!(list.view_index(), Some(3));
    list.take_events();

    list.focus_index(5);
    assert_eq!(list.view_index(), Some(3));
    assert_eq!(list.focused_index(), Some(5));
    assert!(list.take_events().is_empty());

    // In-window target after a shift back.
    list.focus_index(1);
    list.take_events();

    list.focus_index(1);
    assert_eq!(list.view_index(), Some(1));
    assert_eq!(list.focused_index(), Some(1));
    assert!(list.take_events().is_empty());
}

#[test]
fn focus_change_blurs_previous_slot() {
    let mut list = sample();
    list.focus_index(0);
    list.take_events();

    list.navigate(Direction::Down);
    let events = list.take_events();

    assert_eq!(
        events,
        vec![
            Event::Blur { slot: 0 },
            Event::Focus {
                prev: Some(0),
                curr: 1
            },
            Event::Selection { slot: 1 },
        ]
    );
}

#[test]
fn step_up_on_first_slot_slides_window_backward() {
    let mut list = sample();
    list.focus_index(3);
    assert_eq!(list.view_index(), Some(1));
    assert_eq!(list.focused_slot(), Some(2));

    list.navigate(Direction::Up);
    list.navigate(Direction::Up);
    assert_eq!(list.focused_slot(), Some(0));
    assert_eq!(list.focused_index(), Some(1));

    list.navigate(Direction::Up);
    assert_eq!(list.focused_slot(), Some(0));
    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.focused_index(), Some(0));
}

#[test]
fn forward_overflow_is_reported_and_state_kept() {
    let mut list = sample();
    list.navigate(Direction::End);
    list.take_events();

    list.navigate(Direction::Down);

    assert_eq!(list.focused_index(), Some(6));
    assert_eq!(list.view_index(), Some(4));
    assert_eq!(
        list.take_events(),
        vec![Event::Overflow {
            direction: Direction::Down,
            cycle: false
        }]
    );
}

#[test]
fn cycle_wraps_instead_of_overflowing() {
    let mut list = sample().with_cycle(true);

    list.focus_index(0);
    list.take_events();
    list.navigate(Direction::Up);
    assert_eq!(list.focused_index(), Some(6));
    assert_eq!(list.view_index(), Some(4));

    list.navigate(Direction::Down);
    assert_eq!(list.focused_index(), Some(0));
    assert_eq!(list.view_index(), Some(0));

    let overflowed = list
        .take_events()
        .iter()
        .any(|e| matches!(e, Event::Overflow { .. }));
    assert!(!overflowed);
}

#[test]
fn page_down_walks_overlapping_pages_to_the_end() {
    let mut list = sample();
    list.focus_index(0);

    list.navigate(Direction::PageDown);
    assert_eq!(list.view_index(), Some(2));
    assert_eq!(list.focused_slot(), Some(2));
    assert_eq!(list.focused_index(), Some(4));

    // Less than a full page left: clamp so the window ends at the last
    // item.
    list.navigate(Direction::PageDown);
    assert_eq!(list.view_index(), Some(4));
    assert_eq!(list.focused_index(), Some(6));
}

#[test]
fn page_up_walks_back_to_the_start() {
    let mut list = sample();
    list.navigate(Direction::End);

    list.navigate(Direction::PageUp);
    assert_eq!(list.view_index(), Some(2));
    assert_eq!(list.focused_slot(), Some(0));
    assert_eq!(list.focused_index(), Some(2));

    list.navigate(Direction::PageUp);
    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.focused_index(), Some(0));
}

#[test]
fn page_down_on_short_list_focuses_last_item() {
    let mut list = Model::new(vec![1, 2], 3);
    list.navigate(Direction::PageDown);

    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.focused_index(), Some(1));
}

#[test]
fn home_and_end_jump_to_boundaries() {
    let mut list = sample();

    list.navigate(Direction::End);
    assert_eq!(list.view_index(), Some(4));
    assert_eq!(list.focused_index(), Some(6));
    assert_eq!(contents(&list), vec!["50", "60", "70"]);

    list.navigate(Direction::Home);
    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.focused_index(), Some(0));
}

#[test]
fn directions_on_the_wrong_axis_are_ignored() {
    let mut list = sample();
    list.focus_index(0);
    list.take_events();

    list.navigate(Direction::Left);
    list.navigate(Direction::Right);
    assert_eq!(list.focused_index(), Some(0));
    assert!(list.take_events().is_empty());

    let mut row = sample().with_orientation(Orientation::Horizontal);
    row.focus_index(0);
    row.take_events();

    row.navigate(Direction::Down);
    assert_eq!(row.focused_index(), Some(0));

    row.navigate(Direction::Right);
    assert_eq!(row.focused_index(), Some(1));
}

#[test]
fn wheel_maps_to_primary_axis_steps() {
    let mut list = sample();
    list.focus_index(1);

    list.handle_wheel(-1);
    assert_eq!(list.focused_index(), Some(2));

    list.handle_wheel(1);
    assert_eq!(list.focused_index(), Some(1));

    list.handle_wheel(0);
    assert_eq!(list.focused_index(), Some(1));
}

#[test]
fn navigation_on_empty_list_is_a_noop() {
    let mut list: Model<i32> = Model::new(Vec::<i32>::new(), 3);

    assert!(list.navigate(Direction::Down).is_none());
    assert!(list.navigate(Direction::End).is_none());
    assert!(list.take_events().is_empty());
}

#[test]
fn mark_flips_only_the_target_slot() {
    let mut list = sample();

    assert!(list.mark_item(1, true));
    assert!(list.items()[1].marked);
    assert!(list.slot(1).unwrap().marked);
    assert!(!list.items()[0].marked);
    assert!(!list.slot(0).unwrap().marked);

    assert!(list.mark_item(1, false));
    assert!(!list.items()[1].marked);
}

#[test]
fn mark_on_a_stub_slot_is_rejected() {
    let mut list = Model::new(vec![1, 2], 3);

    assert!(!list.mark_item(2, false));
}

#[test]
fn marks_survive_window_shifts() {
    let mut list = sample();
    list.mark_item(0, true);

    list.render_view(3);
    assert!(!list.slot(0).unwrap().marked);

    list.render_view(0);
    assert!(list.slot(0).unwrap().marked);
}

#[test]
fn set_size_rebuilds_slots_and_drops_focus() {
    let mut list = sample();
    list.focus_index(1);

    list.set_size(4);
    assert_eq!(list.size(), 4);
    assert_eq!(list.focused_slot(), None);
    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.slot(3).and_then(|s| s.index), Some(3));
}

#[test]
fn set_data_replaces_and_positions_focus() {
    let mut list = sample();
    list.focus_index(4);

    list.set_data(
        vec![1, 2, 3],
        SetData {
            view_index: None,
            focus_index: Some(2),
        },
    );

    assert_eq!(list.len(), 3);
    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.focused_index(), Some(2));
}

#[test]
fn set_data_without_focus_renders_at_view_index() {
    let mut list = sample();
    list.set_data(
        vec![10, 20, 30, 40, 50],
        SetData {
            view_index: Some(1),
            focus_index: None,
        },
    );

    assert_eq!(list.view_index(), Some(1));
    assert_eq!(list.focused_slot(), None);
    assert_eq!(contents(&list), vec!["20", "30", "40"]);
}

#[test]
fn custom_renderer_shapes_cell_content() {
    let list = sample().with_renderer(|slot: usize, item: &Item<i32>| {
        format!("{}:{}", slot, item.value)
    });

    assert_eq!(contents(&list), vec!["0:10", "1:20", "2:30"]);
}

#[test]
fn key_messages_drive_navigation_and_activation() {
    let mut list = sample();
    list.focus_index(0);
    list.take_events();

    list.update(key(KeyCode::Down));
    assert_eq!(list.focused_index(), Some(1));

    list.update(key(KeyCode::End));
    assert_eq!(list.focused_index(), Some(6));
    list.take_events();

    list.update(key(KeyCode::Enter));
    assert_eq!(
        list.take_events(),
        vec![Event::ItemActivated { slot: 2, index: 6 }]
    );
}

#[test]
fn unbound_keys_are_ignored() {
    let mut list = sample();
    list.focus_index(0);
    list.take_events();

    list.update(key(KeyCode::Char('x')));
    assert_eq!(list.focused_index(), Some(0));
    assert!(list.take_events().is_empty());
}

#[test]
fn vertical_view_is_one_line_per_slot() {
    let list = Model::new(vec![1], 3);
    let rendered = list.view();

    assert_eq!(rendered.lines().count(), 3);
}

#[test]
fn horizontal_view_joins_on_one_line() {
    let list = sample().with_orientation(Orientation::Horizontal);
    let rendered = list.view();

    assert_eq!(rendered.lines().count(), 1);
}

#[test]
fn cell_width_pads_and_truncates() {
    let padded = Model::new(vec!["ab"], 1).with_cell_width(4);
    assert_eq!(strip_ansi_escapes::strip_str(padded.view()), "ab  ");

    let truncated = Model::new(vec!["abcdef"], 1).with_cell_width(4);
    assert_eq!(strip_ansi_escapes::strip_str(truncated.view()), "abc…");
}

#[test]
fn zero_cell_width_renders_empty_cells() {
    let list = Model::new(vec!["ab"], 1).with_cell_width(0);
    assert_eq!(strip_ansi_escapes::strip_str(list.view()), "");
}

// -- scrollbar ----------------------------------------------------------

#[derive(Default)]
struct ScrollLog {
    inits: Vec<ScrollInit>,
    positions: Vec<usize>,
}

#[derive(Clone, Default)]
struct RecordingScroll {
    log: Arc<Mutex<ScrollLog>>,
}

impl ScrollSync for RecordingScroll {
    fn init(&mut self, init: ScrollInit) {
        self.log.lock().unwrap().inits.push(init);
    }

    fn scroll_to(&mut self, position: usize) {
        self.log.lock().unwrap().positions.push(position);
    }

    fn real_size(&self) -> usize {
        self.log
            .lock()
            .unwrap()
            .inits
            .last()
            .map(|init| init.real_size)
            .unwrap_or(0)
    }
}

#[test]
fn scrollbar_tracks_local_geometry_and_position() {
    let scroll = RecordingScroll::default();
    let log = scroll.log.clone();

    let mut list = sample().with_scroll(Box::new(scroll));
    list.navigate(Direction::End);

    let log = log.lock().unwrap();
    assert_eq!(
        log.inits,
        vec![ScrollInit {
            real_size: 7,
            view_size: 3,
            value: 0
        }]
    );
    assert_eq!(log.positions.last(), Some(&4));
}

// -- provider -----------------------------------------------------------

// Pages a fixed collection one overlapping window at a time, the way a
// cursor over a remote result set would.
struct WindowProvider {
    all: Vec<i32>,
    head: Mutex<usize>,
}

impl WindowProvider {
    fn new(all: Vec<i32>) -> Self {
        Self {
            all,
            head: Mutex::new(0),
        }
    }

    fn page(&self, head: usize) -> Page<i32> {
        Page::from_values(self.all[head..(head + 3).min(self.all.len())].to_vec())
    }
}

impl DataProvider<i32> for WindowProvider {
    fn get(&self, request: PageRequest) -> Result<Page<i32>, ProviderError> {
        let mut head = self.head.lock().unwrap();
        *head = match request {
            PageRequest::Init | PageRequest::Home => 0,
            PageRequest::Backward => head.saturating_sub(1),
            PageRequest::Forward => (*head + 1).min(self.all.len() - 3),
            PageRequest::PageBackward => head.saturating_sub(3),
            PageRequest::PageForward => (*head + 3).min(self.all.len() - 3),
            PageRequest::End => self.all.len() - 3,
        };
        Ok(self.page(*head))
    }

    fn max_count(&self) -> usize {
        self.all.len()
    }

    fn view_size(&self) -> usize {
        3
    }

    fn head(&self) -> usize {
        *self.head.lock().unwrap()
    }

    fn pos(&self) -> usize {
        0
    }
}

struct BlockedProvider;

impl DataProvider<i32> for BlockedProvider {
    fn blocked(&self) -> bool {
        true
    }

    fn get(&self, _request: PageRequest) -> Result<Page<i32>, ProviderError> {
        Err(ProviderError::new("request while blocked"))
    }

    fn max_count(&self) -> usize {
        0
    }

    fn view_size(&self) -> usize {
        3
    }

    fn head(&self) -> usize {
        0
    }

    fn pos(&self) -> usize {
        0
    }
}

struct FailingProvider;

impl DataProvider<i32> for FailingProvider {
    fn get(&self, _request: PageRequest) -> Result<Page<i32>, ProviderError> {
        Err(ProviderError::new("backend offline"))
    }

    fn max_count(&self) -> usize {
        0
    }

    fn view_size(&self) -> usize {
        3
    }

    fn head(&self) -> usize {
        0
    }

    fn pos(&self) -> usize {
        0
    }
}

#[tokio::test]
async fn initial_load_renders_without_focus() {
    let provider = Arc::new(WindowProvider::new(vec![10, 20, 30, 40, 50]));
    let mut list = Model::new(Vec::<i32>::new(), 3).with_provider(provider);

    let cmd = list.init_cmd().unwrap();
    let msg = cmd.await.unwrap();
    list.update(msg);

    assert_eq!(contents(&list), vec!["10", "20", "30"]);
    assert_eq!(list.view_index(), Some(0));
    assert_eq!(list.focused_slot(), None);
    assert!(list.take_events().contains(&Event::DataReceived));
}

#[tokio::test]
async fn boundary_move_fetches_and_keeps_focus_position() {
    let provider = Arc::new(WindowProvider::new(vec![10, 20, 30, 40, 50]));
    let mut list = Model::new(Vec::<i32>::new(), 3).with_provider(provider);

    let msg = list.init_cmd().unwrap().await.unwrap();
    list.update(msg);
    list.focus_index(2);

    // At the end of the local page a step forward becomes a fetch.
    let cmd = list.navigate(Direction::Down).expect("fetch command");
    let msg = cmd.await.unwrap();
    list.update(msg);

    assert_eq!(contents(&list), vec!["20", "30", "40"]);
    assert_eq!(list.focused_slot(), Some(2));
    assert_eq!(list.selected_item().map(|i| i.value), Some(40));
}

#[tokio::test]
async fn end_request_focuses_last_slot_of_final_page() {
    let provider = Arc::new(WindowProvider::new(vec![10, 20, 30, 40, 50]));
    let mut list = Model::new(Vec::<i32>::new(), 3).with_provider(provider);

    let msg = list.init_cmd().unwrap().await.unwrap();
    list.update(msg);

    let cmd = list.navigate(Direction::End).expect("fetch command");
    let msg = cmd.await.unwrap();
    list.update(msg);

    assert_eq!(contents(&list), vec!["30", "40", "50"]);
    assert_eq!(list.focused_slot(), Some(2));
    assert_eq!(list.selected_item().map(|i| i.value), Some(50));
}

#[test]
fn blocked_provider_swallows_boundary_moves() {
    let mut list = Model::new(vec![1, 2, 3], 3).with_provider(Arc::new(BlockedProvider));
    list.focus_index(2);
    list.take_events();

    assert!(list.navigate(Direction::Down).is_none());
    assert_eq!(list.focused_index(), Some(2));
    assert!(list.take_events().is_empty());
}

#[test]
fn init_cmd_respects_blocked_provider() {
    let list = Model::new(Vec::<i32>::new(), 3).with_provider(Arc::new(BlockedProvider));
    assert!(list.init_cmd().is_none());
}

#[tokio::test]
async fn failed_fetch_reports_error_and_keeps_state() {
    let mut list = Model::new(vec![1, 2, 3], 3).with_provider(Arc::new(FailingProvider));
    list.focus_index(2);
    list.take_events();

    let cmd = list.navigate(Direction::Down).expect("fetch command");
    let msg = cmd.await.unwrap();
    list.update(msg);

    assert_eq!(list.len(), 3);
    assert_eq!(list.focused_index(), Some(2));
    assert_eq!(
        list.take_events(),
        vec![Event::DataError {
            message: "backend offline".into()
        }]
    );
}

#[test]
fn provider_messages_for_other_instances_are_ignored() {
    let mut list = sample();
    list.take_events();

    let stray = PageMsg {
        id: list.id() + 1,
        request: PageRequest::Forward,
        page: Page::from_values(vec![1, 2, 3]),
    };
    list.update(Box::new(stray));
    assert_eq!(list.len(), 7);
    assert!(list.take_events().is_empty());

    let stray_err = PageErrorMsg {
        id: list.id() + 1,
        request: PageRequest::Forward,
        error: ProviderError::new("nope"),
    };
    list.update(Box::new(stray_err));
    assert!(list.take_events().is_empty());
}