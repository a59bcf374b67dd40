//! Behavioural tests for the editor session

use super::*;
use crate::repl::commands::MovementDirection;
use crate::repl::geometry::Position;
use crate::repl::models::Nibble;

/// Terminal size that yields a hex pane of `bytes_per_line` x `lines`
fn terminal_for(bytes_per_line: u16, lines: u16) -> TerminalSize {
    (bytes_per_line * 3 + 20, lines + 18)
}

fn view_model(bytes: &[u8], bytes_per_line: u16, lines: u16) -> ViewModel {
    let buffer = ByteBuffer::from_bytes(bytes.to_vec()).unwrap();
    ViewModel::new(buffer, terminal_for(bytes_per_line, lines))
}

fn assert_cursor_visible(vm: &ViewModel) {
    let offset = vm.cursor().byte_offset;
    assert!(
        vm.viewport().first_visible_byte() <= offset
            && offset <= vm.viewport().last_visible_byte(vm.buffer().len()),
        "cursor {} outside {}..={}",
        offset,
        vm.viewport().first_visible_byte(),
        vm.viewport().last_visible_byte(vm.buffer().len())
    );
}

#[test]
fn view_model_should_start_at_first_digit_scrolled_to_top() {
    let vm = view_model(&[1, 2, 3], 4, 2);
    assert_eq!(vm.cursor(), CursorState::new(0, Nibble::High));
    assert_eq!(vm.viewport().scroll_start(), 0);
    assert_eq!(vm.viewport().bytes_per_line(), 4);
    assert_eq!(vm.viewport().height(), 2);
}

#[test]
fn right_right_overwrite_should_edit_second_byte() {
    let mut vm = view_model(&[0x12, 0x34, 0x56, 0x78], 2, 2);

    vm.move_cursor_right();
    vm.move_cursor_right();
    assert_eq!(vm.cursor(), CursorState::new(1, Nibble::High));

    assert!(vm.overwrite_nibble('f'));
    assert_eq!(vm.buffer().as_slice(), &[0x12, 0xf4, 0x56, 0x78]);
    assert_eq!(vm.cursor(), CursorState::new(1, Nibble::Low));
}

#[test]
fn overwrite_with_non_hex_should_change_nothing() {
    let mut vm = view_model(&[0x12, 0x34], 2, 2);
    vm.move_cursor_right();
    let before = vm.cursor();

    assert!(!vm.overwrite_nibble('!'));
    assert_eq!(vm.buffer().as_slice(), &[0x12, 0x34]);
    assert_eq!(vm.cursor(), before);
}

#[test]
fn move_left_at_start_should_clamp_to_first_digit() {
    let mut vm = view_model(&[0x12, 0x34], 2, 2);
    vm.move_cursor_left();
    assert_eq!(vm.cursor(), CursorState::new(0, Nibble::High));
}

#[test]
fn move_right_at_end_should_clamp_to_last_digit() {
    let mut vm = view_model(&[0x12, 0x34], 2, 2);
    for _ in 0..10 {
        vm.move_cursor_right();
    }
    assert_eq!(vm.cursor(), CursorState::new(1, Nibble::Low));
}

#[test]
fn vertical_moves_should_be_ignored_at_buffer_edges() {
    let mut vm = view_model(&[0; 10], 4, 5);
    vm.move_cursor_up();
    assert_eq!(vm.cursor().byte_offset, 0);

    vm.move_cursor_down();
    vm.move_cursor_down();
    assert_eq!(vm.cursor().byte_offset, 8);
    vm.move_cursor_down();
    assert_eq!(vm.cursor().byte_offset, 8);
}

#[test]
fn moving_down_past_viewport_should_scroll_one_line() {
    let mut vm = view_model(&[0; 64], 4, 2);
    vm.move_cursor_down();
    assert_eq!(vm.viewport().scroll_start(), 0);

    let result = vm.move_cursor_down();
    assert!(result.scrolled);
    assert_eq!(vm.viewport().scroll_start(), 1);
    assert_eq!(vm.cursor().byte_offset, 8);

    vm.move_cursor_up();
    vm.move_cursor_up();
    assert_eq!(vm.viewport().scroll_start(), 0);
}

#[test]
fn arbitrary_move_sequences_should_keep_cursor_visible() {
    let directions = [
        MovementDirection::Left,
        MovementDirection::Right,
        MovementDirection::Up,
        MovementDirection::Down,
    ];
    // Deterministic pseudo-random walk
    let mut seed: u32 = 0x2545_f491;
    let cases = [(1usize, 1u16, 1u16), (7, 2, 1), (100, 8, 3), (257, 5, 4)];
    for (len, bytes_per_line, lines) in cases {
        let mut vm = view_model(&vec![0u8; len], bytes_per_line, lines);
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let direction = directions[(seed % 4) as usize];
            vm.move_cursor(direction);
            assert!(vm.cursor().byte_offset < len);
            assert_cursor_visible(&vm);
        }
    }
}

#[test]
fn left_then_right_should_be_inverse_away_from_boundaries() {
    let mut vm = view_model(&[0; 32], 4, 2);
    for _ in 0..5 {
        vm.move_cursor_right();
    }
    let start = vm.cursor();
    vm.move_cursor_left();
    vm.move_cursor_right();
    assert_eq!(vm.cursor(), start);
}

#[test]
fn shrinking_bytes_per_line_should_keep_cursor_offset() {
    let mut vm = view_model(&[0; 200], 16, 2);
    for _ in 0..3 {
        vm.move_cursor_down();
    }
    for _ in 0..5 {
        vm.move_cursor_right();
    }
    let before = vm.cursor();
    assert_eq!(before.byte_offset, 50);

    let (width, height) = terminal_for(4, 2);
    assert!(vm.update_terminal_size(width, height));
    assert_eq!(vm.cursor(), before);

    vm.clamp();
    assert_eq!(vm.cursor(), before);
    assert_eq!(vm.viewport().bytes_per_line(), 4);
    assert_cursor_visible(&vm);
}

#[test]
fn update_terminal_size_should_report_no_change_for_same_size() {
    let mut vm = view_model(&[0; 4], 4, 2);
    let (width, height) = vm.terminal_size();
    assert!(!vm.update_terminal_size(width, height));
}

#[test]
fn narrow_terminal_should_fall_back_to_one_byte_per_line() {
    let mut vm = view_model(&[0; 8], 4, 2);
    vm.update_terminal_size(10, 5);
    vm.clamp();
    assert_eq!(vm.viewport().bytes_per_line(), 1);
    assert_eq!(vm.viewport().height(), 1);
    assert_cursor_visible(&vm);
}

#[test]
fn visible_rows_should_render_hex_pairs_per_line() {
    let vm = view_model(&[0x12, 0x34, 0x56, 0x78, 0x9a], 2, 2);
    let rows = vm.visible_rows();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text, "12 34 ");
    assert_eq!(rows[0].origin, Position::new(3, 10));
    assert_eq!(rows[1].text, "56 78 ");
    assert_eq!(rows[1].first_offset, 2);
}

#[test]
fn visible_rows_should_stop_at_buffer_end() {
    let mut vm = view_model(&[0x12, 0x34, 0x56, 0x78, 0x9a], 2, 2);
    vm.move_cursor_down();
    vm.move_cursor_down();
    let rows = vm.visible_rows();

    assert_eq!(vm.viewport().scroll_start(), 1);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].text, "9a ");
    assert_eq!(rows[1].origin.row, 4);
}

#[test]
fn screen_cursor_should_track_nibble_and_scroll() {
    let mut vm = view_model(&[0; 16], 4, 2);
    assert_eq!(vm.screen_cursor(), Position::new(3, 10));

    vm.move_cursor_right();
    assert_eq!(vm.screen_cursor(), Position::new(3, 11));

    vm.move_cursor_right();
    assert_eq!(vm.screen_cursor(), Position::new(3, 13));

    vm.move_cursor_down();
    vm.move_cursor_down();
    // Line 2 is now the last visible line
    assert_eq!(vm.viewport().scroll_start(), 1);
    assert_eq!(vm.screen_cursor(), Position::new(4, 13));
}

#[test]
fn value_readout_should_follow_cursor() {
    let mut vm = view_model(&[0x01, 0x02, 0x03], 4, 2);
    vm.move_cursor_right();
    vm.move_cursor_right();

    let readout = vm.value_readout();
    assert_eq!(readout.offset, 1);
    assert_eq!(readout.uint8, Some(2));
    assert_eq!(readout.uint16, Some(0x0302));
    assert_eq!(readout.uint32, None);
}

#[test]
fn status_line_should_mark_modified_buffers() {
    let mut vm = view_model(&[0x00], 4, 2).with_file_path("/tmp/data.bin");
    assert!(vm.status_line().starts_with("data.bin | 1 bytes"));

    vm.overwrite_nibble('1');
    assert!(vm.status_line().starts_with("data.bin [+]"));

    vm.set_status_message("Saved");
    assert!(vm.status_line().ends_with("| Saved"));
    vm.clear_status_message();
    assert!(vm.status_message().is_none());
}

#[test]
fn save_should_write_back_to_loaded_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), [0x00, 0x00]).unwrap();

    let buffer = ByteBuffer::open(file.path()).unwrap();
    let mut vm = ViewModel::new(buffer, (80, 40)).with_file_path(file.path());
    vm.overwrite_nibble('c');
    vm.save().unwrap();

    assert_eq!(std::fs::read(file.path()).unwrap(), vec![0xc0, 0x00]);
    assert!(!vm.buffer().is_modified());
}

#[test]
fn save_without_path_should_fail() {
    let mut vm = view_model(&[0x00], 4, 2);
    assert!(matches!(vm.save(), Err(HexError::Save { .. })));
}
