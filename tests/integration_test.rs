use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use file_events_table::{
    AuditEvent, AuditEventConsumer, CwdRecordData, Error, FileEventsTable, MemoryLogger,
    PathRecordData, RecordKind, Severity, StaticConfiguration, SyscallRecordData, SyscallType,
    TracingLogger, Value, VirtualTable,
};

fn table_with_capacity(max: usize) -> (FileEventsTable, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let table = FileEventsTable::create(&StaticConfiguration::new(max), logger.clone())
        .expect("table created");
    (table, logger)
}

fn file_event(syscall_type: SyscallType, pid: i64) -> AuditEvent {
    AuditEvent::new(
        SyscallRecordData::new(syscall_type, pid, "/usr/bin/cat")
            .with_auid(1000)
            .with_succeeded(true),
    )
    .with_cwd(CwdRecordData {
        cwd: "/home/alice".to_string(),
    })
    .with_paths(vec![PathRecordData::new(format!("/tmp/file-{}", pid), "99")])
}

fn pids(table: &FileEventsTable) -> Vec<i64> {
    table
        .generate_row_list()
        .iter()
        .filter_map(|r| r.get("pid").and_then(Value::as_integer))
        .collect()
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

#[test]
fn irrelevant_events_are_filtered() {
    let (table, logger) = table_with_capacity(10);

    for syscall_type in [
        SyscallType::Execve,
        SyscallType::Exit,
        SyscallType::Fork,
        SyscallType::Connect,
    ] {
        let event = AuditEvent::new(SyscallRecordData::new(syscall_type, 1, "/bin/sh"));
        assert!(table.process_events(&[event]).is_ok());
    }

    assert_eq!(table.queued_row_count(), 0);
    assert!(logger.is_empty());
}

#[test]
fn open_without_cwd_is_rejected() {
    let (table, _) = table_with_capacity(10);
    let mut event = file_event(SyscallType::Open, 1);
    event.cwd_data = None;

    assert_eq!(table.queued_row_count(), 0);
    let err = table.process_events(&[event]).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRecord(m) if m.kind == RecordKind::Cwd
    ));
    assert_eq!(table.queued_row_count(), 0);
}

#[test]
fn openat_fields_are_mapped() {
    let (table, _) = table_with_capacity(10);
    let event = AuditEvent::new(
        SyscallRecordData::new(SyscallType::OpenAt, 42, "/usr/bin/less")
            .with_auid(1000)
            .with_succeeded(true),
    )
    .with_cwd(CwdRecordData {
        cwd: "/root".to_string(),
    })
    .with_paths(vec![PathRecordData::new("/etc/passwd", "1234")]);

    let before = now();
    table.process_events(&[event]).unwrap();
    let after = now();

    let rows = table.generate_row_list();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    assert_eq!(row.get("action"), Some(&Value::from("openat")));
    assert_eq!(row.get("pid"), Some(&Value::Integer(42)));
    assert_eq!(row.get("path"), Some(&Value::from("/usr/bin/less")));
    assert_eq!(row.get("auid"), Some(&Value::Integer(1000)));
    assert_eq!(row.get("success"), Some(&Value::Integer(1)));
    assert_eq!(row.get("file_path"), Some(&Value::from("/etc/passwd")));
    assert_eq!(row.get("inode"), Some(&Value::from("1234")));

    let time = row.get("time").and_then(Value::as_integer).unwrap();
    assert!(time >= before - 2 && time <= after + 2);
}

#[test]
fn bounded_eviction_keeps_newest_rows() {
    let (table, logger) = table_with_capacity(3);
    let batch: Vec<_> = (1..=5)
        .map(|pid| file_event(SyscallType::Open, pid))
        .collect();

    table.process_events(&batch).unwrap();

    let warnings = logger.messages_at(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Dropping 2 rows"));
    assert!(warnings[0].contains("max row count is set to 3"));
    assert_eq!(pids(&table), vec![3, 4, 5]);
}

#[test]
fn drain_transfers_then_empties() {
    let (table, _) = table_with_capacity(100);
    let batch: Vec<_> = (1..=4)
        .map(|pid| file_event(SyscallType::Create, pid))
        .collect();

    table.process_events(&batch).unwrap();

    assert_eq!(pids(&table), vec![1, 2, 3, 4]);
    assert!(table.generate_row_list().is_empty());
}

#[test]
fn failed_batch_is_not_partially_applied() {
    let (table, _) = table_with_capacity(10);
    let mut invalid = file_event(SyscallType::Open, 2);
    invalid.path_data = None;

    let result = table.process_events(&[file_event(SyscallType::Create, 1), invalid]);

    assert!(result.is_err());
    assert_eq!(table.queued_row_count(), 0);
}

#[test]
fn concurrent_batches_are_not_interleaved() {
    const PRODUCERS: i64 = 8;
    const BATCH: i64 = 50;

    let (table, logger) = table_with_capacity(10_000);

    std::thread::scope(|s| {
        for producer in 0..PRODUCERS {
            let table = &table;
            s.spawn(move || {
                let batch: Vec<_> = (0..BATCH)
                    .map(|i| file_event(SyscallType::Open, producer * 1000 + i))
                    .collect();
                table.process_events(&batch).unwrap();
            });
        }
    });

    let pids = pids(&table);
    assert_eq!(pids.len(), (PRODUCERS * BATCH) as usize);
    for chunk in pids.chunks(BATCH as usize) {
        let producer = chunk[0] / 1000;
        let expected: Vec<_> = (0..BATCH).map(|i| producer * 1000 + i).collect();
        assert_eq!(chunk, expected.as_slice());
    }
    assert!(logger.is_empty());
}

#[test]
fn drain_concurrent_with_producers_loses_nothing_within_capacity() {
    let (table, _) = table_with_capacity(100_000);
    let mut drained = Vec::new();

    std::thread::scope(|s| {
        let producer = s.spawn(|| {
            for pid in 0..200 {
                table
                    .process_events(&[file_event(SyscallType::OpenAt, pid)])
                    .unwrap();
            }
        });

        while !producer.is_finished() {
            drained.extend(table.generate_row_list());
        }
    });
    drained.extend(table.generate_row_list());

    let pids: Vec<_> = drained
        .iter()
        .filter_map(|r| r.get("pid").and_then(Value::as_integer))
        .collect();
    assert_eq!(pids, (0..200).collect::<Vec<_>>());
}

#[test]
fn tracing_logger_reports_eviction() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let table = FileEventsTable::create(&StaticConfiguration::new(1), Arc::new(TracingLogger))
        .expect("table created");

    table
        .process_events(&[
            file_event(SyscallType::Open, 1),
            file_event(SyscallType::Open, 2),
        ])
        .unwrap();

    assert_eq!(pids(&table), vec![2]);
}
