use super::*;

#[test]
fn buffer_println_appends_newline() {
    let handler = buffer_handler();
    handler.println("hello");
    assert_eq!(handler.output(), "hello\n");
}

#[test]
fn buffer_print_has_no_newline() {
    let handler = buffer_handler();
    handler.print("a");
    handler.print("b");
    handler.println("c");
    assert_eq!(handler.output(), "abc\n");
}

#[test]
fn buffer_clear_empties() {
    let handler = buffer_handler();
    handler.println("hello");
    handler.clear();
    assert!(handler.output().is_empty());
}

#[test]
fn silent_discards() {
    let handler = silent_handler();
    handler.println("hello");
    handler.print("world");
    assert_eq!(handler.output(), "");
}

#[test]
fn buffer_is_shared_across_threads() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);

    let worker = std::thread::spawn(move || {
        for _ in 0..50 {
            other.println("a");
        }
    });
    for _ in 0..50 {
        handler.println("b");
    }
    worker.join().unwrap();

    assert_eq!(handler.output().lines().count(), 100);
}
