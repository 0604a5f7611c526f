//! Integration tests for the single-region stack and queue.

use multistack::{Error, Queue, Stack};
use tempfile::tempdir;

#[test]
fn stack_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let mut stack = Stack::new(4);
    for word in ["delta", "alpha", "charlie"] {
        stack.push(word.to_string())?;
    }

    assert_eq!(stack.min()?, "alpha");
    assert_eq!(stack.top()?, "charlie");
    assert_eq!(stack.len(), 3);
    assert!(!stack.is_full());

    let collected: Vec<&String> = (&stack).into_iter().collect();
    assert_eq!(collected, ["delta", "alpha", "charlie"]);

    assert_eq!(stack.pop()?, "charlie");
    assert_eq!(stack.to_string(), "[delta, alpha]");
    Ok(())
}

#[test]
fn queue_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let mut queue = Queue::new(3);
    queue.push(30u32)?;
    queue.push(10)?;
    queue.push(20)?;

    let error = queue.push(40).unwrap_err();
    assert!(matches!(error, Error::CollectionFull { capacity: 3, .. }));
    assert_eq!(error.kind().to_string(), "collection_full");

    assert_eq!(queue.pop()?, 30);
    queue.push(5)?;
    assert_eq!(queue.min()?, 5);
    assert_eq!(queue.to_string(), "[10, 20, 5]");
    Ok(())
}

#[test]
fn stack_text_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("stack.txt");

    let mut stack = Stack::new(10);
    for value in [3, 1, 4, 1, 5] {
        stack.push(value)?;
    }
    stack.save_text(&path)?;
    assert_eq!(std::fs::read_to_string(&path)?, "5\n3\n1\n4\n1\n5\n");

    let loaded = Stack::<i32>::load_text(&path)?;
    assert_eq!(loaded.capacity(), 5);
    assert_eq!(loaded.iter().copied().collect::<Vec<_>>(), vec![3, 1, 4, 1, 5]);
    assert_eq!(loaded.top()?, 5);
    Ok(())
}

#[test]
fn queue_text_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("queue.txt");

    let mut queue = Queue::new(2);
    queue.push('x')?;
    queue.push('y')?;
    queue.save_text(&path)?;

    let mut loaded = Queue::<char>::load_text(&path)?;
    assert_eq!(loaded, queue);
    assert_eq!(loaded.pop()?, 'x');
    Ok(())
}

#[test]
fn malformed_text_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");

    std::fs::write(&path, "3\n1\n2\n").unwrap();
    assert!(matches!(Stack::<i32>::load_text(&path), Err(Error::Malformed { .. })));
    assert!(matches!(Queue::<i32>::load_text(&path), Err(Error::Malformed { .. })));

    let error = Stack::<i32>::load_text(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(error, Error::FileError { operation: "load_text", .. }));
    assert!(error.location().is_some());

    let error = Queue::<i32>::new(1)
        .save_text(dir.path().join("absent").join("queue.txt"))
        .unwrap_err();
    assert_eq!(error.operation(), Some("save_text"));
}
