/*!
 * Shell Session Tests
 * Command output, error reporting, and the ten-slot walkthrough through text input
 */

use contiguous_allocator::{Flow, MemoryManager, Shell, SimulatorConfig, SimulatorError, Tag};
use pretty_assertions::assert_eq;

type TestShell = Shell<Vec<u8>, Vec<u8>>;

fn shell_with(config: SimulatorConfig) -> TestShell {
    let manager = MemoryManager::with_capacity(config.pool_size).unwrap();
    Shell::new(manager, config, Vec::new(), Vec::new())
}

fn shell(size: usize) -> TestShell {
    shell_with(SimulatorConfig::new(size))
}

fn finish(shell: TestShell) -> (MemoryManager, String, String) {
    let (manager, out, err) = shell.into_parts();
    (
        manager,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_walkthrough_through_commands() {
    let mut sh = shell(10);
    let input = "\
A A 5 F
S
A B 3 F
S
F A
S
A C 4 B
S
STAT
";
    assert_eq!(sh.run(input.as_bytes(), false).unwrap(), Flow::Continue);

    let (_, out, err) = finish(sh);
    assert_eq!(err, "");
    assert_eq!(
        out,
        "AAAAA.....\n\
         AAAAABBB..\n\
         .....BBB..\n\
         CCCC.BBB..\n\
         \taddresses [0:3] - process C\n\
         \taddresses [4:4] - unallocated\n\
         \taddresses [5:7] - process B\n\
         \taddresses [8:9] - unallocated\n\n"
    );
}

#[test]
fn test_compact_command() {
    let mut sh = shell(12);
    sh.run("A A 3 F\nA B 3 F\nA C 3 F\nF A\nF C\nC\nS\n".as_bytes(), false)
        .unwrap();

    let (manager, out, _) = finish(sh);
    assert_eq!(out, "BBB.........\n");
    assert_eq!(manager.process_memory('B'.try_into().unwrap()), 3);
}

#[test]
fn test_show_wraps_at_configured_width() {
    let mut sh = shell_with(SimulatorConfig::new(10).with_width(4));
    sh.execute_line("A Q 6 F").unwrap();
    sh.execute_line("S").unwrap();

    let (_, out, _) = finish(sh);
    assert_eq!(out, "QQQQ\nQQ..\n..\n");
}

#[test]
fn test_long_lines_are_truncated_to_width() {
    let mut sh = shell_with(SimulatorConfig::new(20).with_width(7));
    // Only "A X 10 " survives, so the strategy is missing
    sh.run("A X 10 FIRST\n".as_bytes(), false).unwrap();

    let (manager, _, err) = finish(sh);
    assert!(err.contains("missing strategy"));
    assert_eq!(manager.stats().used_slots, 0);
}

#[test]
fn test_text_past_width_is_discarded_not_reread() {
    let mut sh = shell_with(SimulatorConfig::new(5).with_width(10));
    // Characters 10.. ("SHOW") are dropped with the rest of the line
    sh.run("A X 2 F   SHOW\nA Y 1 F\n".as_bytes(), false)
        .unwrap();

    let (manager, out, err) = finish(sh);
    assert_eq!(out, "");
    assert_eq!(err, "");
    assert_eq!(manager.render(), "XXY..");
}

#[test]
fn test_clear_emits_terminal_reset() {
    let mut sh = shell(2);
    sh.execute_line("CLEAR").unwrap();

    let (_, out, _) = finish(sh);
    assert!(out.starts_with('\u{1b}'));
    assert!(!out.contains(".."));
}

#[test]
fn test_dump_reports_pool_as_json() {
    let mut sh = shell(10);
    sh.run("A A 4 F\nA B 4 F\nF A\nD\n".as_bytes(), false)
        .unwrap();

    let (_, out, _) = finish(sh);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["stats"]["total_slots"], 10);
    assert_eq!(value["stats"]["used_slots"], 4);
    assert_eq!(value["stats"]["hole_count"], 2);
    assert_eq!(value["stats"]["largest_hole"], 4);
    assert_eq!(value["processes"], serde_json::json!(["B"]));
    assert_eq!(value["regions"].as_array().unwrap().len(), 3);
    assert_eq!(value["regions"][1]["tag"]["owner"], "B");
}

#[test]
fn test_failed_allocation_leaves_pool_untouched() {
    let mut sh = shell(5);
    sh.run("A A 3 F\nA B 3 W\nA C 0 F\nS\n".as_bytes(), false)
        .unwrap();

    let (manager, out, err) = finish(sh);
    assert_eq!(out, "AAA..\n");
    assert_eq!(err, "");
    assert_eq!(manager.snapshot()[3], Tag::Free);
}

#[test]
fn test_freeing_unknown_process_is_silent() {
    let mut sh = shell(4);
    sh.run("F Z\nS\n".as_bytes(), false).unwrap();

    let (_, out, err) = finish(sh);
    assert_eq!(out, "....\n");
    assert_eq!(err, "");
}

#[test]
fn test_each_bad_line_reports_one_error() {
    let mut sh = shell(4);
    let input = "A\nA B\nA B 2\nA B 2 Z\nA . 2 F\nF\nR\nNOPE\n\n   \nS\n";
    sh.run(input.as_bytes(), false).unwrap();

    let (_, out, err) = finish(sh);
    assert_eq!(out, "....\n");
    assert_eq!(err.lines().count(), 8);
    assert!(err.lines().all(|l| l.starts_with("Error: ")));
    assert!(err.contains("Unknown placement strategy \"Z\""));
    assert!(err.contains("Unknown command \"NOPE\""));
}

#[test]
fn test_exit_stops_reading() {
    let mut sh = shell(3);
    let flow = sh.run("A A 1 F\nEXIT\nA B 1 F\n".as_bytes(), false).unwrap();

    let (manager, _, _) = finish(sh);
    assert_eq!(flow, Flow::Exit);
    assert_eq!(manager.render(), "A..");
}

#[test]
fn test_execute_line_surfaces_parse_errors() {
    let mut sh = shell(3);
    let err = sh.execute_line("A A many F").unwrap_err();
    assert!(matches!(err, SimulatorError::Command(_)));
    assert!(!err.is_fatal());
}
