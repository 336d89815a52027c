// Pattern 4: Singletons
// Three independent lazily initialized single-instance types: a key-value
// config store, a leveled logger, and a hit counter. Each lives in its own
// module so the access function is the only way to obtain one; direct
// construction from outside the module does not compile.

// ============================================================================
// Example: Config Store behind OnceLock
// ============================================================================

mod config {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    static INSTANCE: OnceLock<ConfigStore> = OnceLock::new();

    pub struct ConfigStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl ConfigStore {
        // Private: global() is the only way in.
        fn new() -> Self {
            let mut defaults = HashMap::new();
            defaults.insert("app_name".to_string(), "oop-patterns".to_string());
            defaults.insert("max_connections".to_string(), "8".to_string());
            defaults.insert("greeting".to_string(), "hello".to_string());
            ConfigStore {
                values: Mutex::new(defaults),
            }
        }

        /// First access seeds the defaults; every later access returns the
        /// same cached instance.
        pub fn global() -> &'static ConfigStore {
            INSTANCE.get_or_init(ConfigStore::new)
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        pub fn set(&self, key: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        pub fn keys(&self) -> Vec<String> {
            let mut keys: Vec<String> = self.values.lock().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        }
    }
}

// ============================================================================
// Example: Leveled Logger behind lazy_static
// ============================================================================

mod logger {
    use colored::Colorize;
    use lazy_static::lazy_static;
    use serde::Serialize;
    use std::fmt;
    use std::sync::Mutex;

    lazy_static! {
        static ref INSTANCE: Logger = Logger::new();
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum LogLevel {
        Debug,
        Info,
        Warn,
        Error,
    }

    impl fmt::Display for LogLevel {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            let name = match self {
                LogLevel::Debug => "DEBUG",
                LogLevel::Info => "INFO",
                LogLevel::Warn => "WARN",
                LogLevel::Error => "ERROR",
            };
            write!(f, "{}", name)
        }
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct LogEntry {
        pub level: LogLevel,
        pub message: String,
    }

    pub struct Logger {
        entries: Mutex<Vec<LogEntry>>,
    }

    impl Logger {
        fn new() -> Self {
            Logger {
                entries: Mutex::new(Vec::new()),
            }
        }

        pub fn global() -> &'static Logger {
            &INSTANCE
        }

        /// Records the entry and echoes one level-colored line to stdout.
        pub fn log(&self, level: LogLevel, message: &str) {
            let line = format!("[{}] {}", level, message);
            let echo = match level {
                LogLevel::Debug => line.dimmed(),
                LogLevel::Info => line.green(),
                LogLevel::Warn => line.yellow(),
                LogLevel::Error => line.red(),
            };
            println!("{}", echo);

            self.entries.lock().unwrap().push(LogEntry {
                level,
                message: message.to_string(),
            });
        }

        pub fn debug(&self, message: &str) {
            self.log(LogLevel::Debug, message);
        }

        pub fn info(&self, message: &str) {
            self.log(LogLevel::Info, message);
        }

        pub fn warn(&self, message: &str) {
            self.log(LogLevel::Warn, message);
        }

        pub fn error(&self, message: &str) {
            self.log(LogLevel::Error, message);
        }

        pub fn len(&self) -> usize {
            self.entries.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// One plain-text line per recorded entry.
        pub fn export(&self) -> String {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .map(|e| format!("[{}] {}", e.level, e.message))
                .collect::<Vec<_>>()
                .join("\n")
        }

        pub fn export_json(&self) -> serde_json::Result<String> {
            let entries = self.entries.lock().unwrap();
            serde_json::to_string_pretty(&*entries)
        }

        pub fn entries_at(&self, level: LogLevel) -> Vec<String> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.level == level)
                .map(|e| e.message.clone())
                .collect()
        }

        pub fn clear(&self) {
            self.entries.lock().unwrap().clear();
        }
    }
}

// ============================================================================
// Example: Hit Counter behind a Function-Local OnceLock
// ============================================================================

mod hits {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::OnceLock;

    pub struct HitCounter {
        count: AtomicI64,
    }

    impl HitCounter {
        pub fn global() -> &'static HitCounter {
            static INSTANCE: OnceLock<HitCounter> = OnceLock::new();
            INSTANCE.get_or_init(|| HitCounter {
                count: AtomicI64::new(0),
            })
        }

        pub fn increment(&self) -> i64 {
            self.count.fetch_add(1, Ordering::Relaxed) + 1
        }

        pub fn decrement(&self) -> i64 {
            self.count.fetch_sub(1, Ordering::Relaxed) - 1
        }

        pub fn get(&self) -> i64 {
            self.count.load(Ordering::Relaxed)
        }

        pub fn reset(&self) {
            self.count.store(0, Ordering::Relaxed);
        }
    }
}

use config::ConfigStore;
use hits::HitCounter;
use logger::{LogLevel, Logger};

// ============================================================================
// Demos
// ============================================================================

fn config_store_example() {
    let config = ConfigStore::global();
    let again = ConfigStore::global();
    println!("Same instance: {}", std::ptr::eq(config, again));

    println!("Defaults: {:?}", config.keys());
    println!("app_name = {:?}", config.get("app_name"));

    config.set("greeting", "hello again");
    println!("greeting after set = {:?}", config.get("greeting"));
    println!("missing key = {:?}", config.get("no_such_key"));
}

fn logger_example() {
    let log = Logger::global();
    println!("Same instance: {}", std::ptr::eq(log, Logger::global()));

    log.debug("starting demo");
    log.info("everything nominal");
    log.warn("disk almost full");
    log.error("disk full");

    println!("\nRecorded {} entries", log.len());
    println!("--- export ---\n{}", log.export());
    println!("--- warnings only ---\n{:?}", log.entries_at(LogLevel::Warn));

    match log.export_json() {
        Ok(json) => println!("--- json export ---\n{}", json),
        Err(e) => println!("json export failed: {}", e),
    }

    log.clear();
    println!("After clear, empty: {}", log.is_empty());
}

fn hit_counter_example() {
    let counter = HitCounter::global();
    println!("Same instance: {}", std::ptr::eq(counter, HitCounter::global()));

    counter.reset();
    println!("increment -> {}", counter.increment());
    println!("increment -> {}", counter.increment());
    println!("increment -> {}", counter.increment());
    println!("decrement -> {}", counter.decrement());
    println!("current   -> {}", counter.get());

    counter.reset();
    println!("after reset -> {}", counter.get());
}

// ============================================================================
// Example: Dependency Injection Instead of a Singleton
// ============================================================================

struct AppSettings {
    greeting: String,
}

struct Greeter<'a> {
    settings: &'a AppSettings,
}

impl<'a> Greeter<'a> {
    fn new(settings: &'a AppSettings) -> Self {
        Greeter { settings }
    }

    fn greet(&self, who: &str) -> String {
        format!("{}, {}!", self.settings.greeting, who)
    }
}

fn dependency_injection_example() {
    // Explicit dependencies: no global state, trivially testable, and two
    // configurations can coexist in one process.
    let friendly = AppSettings {
        greeting: "Welcome".to_string(),
    };
    let terse = AppSettings {
        greeting: "Hi".to_string(),
    };

    println!("{}", Greeter::new(&friendly).greet("Maria"));
    println!("{}", Greeter::new(&terse).greet("Maria"));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Singleton state is process-wide; tests that mutate it serialize here.
    static STATE_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_access_points_agree() {
        assert!(std::ptr::eq(ConfigStore::global(), ConfigStore::global()));
    }

    #[test]
    fn logger_access_points_agree() {
        assert!(std::ptr::eq(Logger::global(), Logger::global()));
    }

    #[test]
    fn counter_access_points_agree() {
        assert!(std::ptr::eq(HitCounter::global(), HitCounter::global()));
    }

    #[test]
    fn config_seeds_defaults_on_first_access() {
        assert!(ConfigStore::global().get("app_name").is_some());
    }

    #[test]
    fn config_set_then_get_roundtrip() {
        let _guard = STATE_LOCK.lock().unwrap();

        let config = ConfigStore::global();
        config.set("test_only_key", "42");
        assert_eq!(config.get("test_only_key").as_deref(), Some("42"));
        assert_eq!(config.get("never_set_key"), None);
    }

    #[test]
    fn logger_records_exports_and_clears() {
        let _guard = STATE_LOCK.lock().unwrap();

        let log = Logger::global();
        log.clear();

        log.info("first");
        log.warn("second");
        assert_eq!(log.len(), 2);

        let exported = log.export();
        assert!(exported.contains("[INFO] first"));
        assert!(exported.contains("[WARN] second"));

        assert_eq!(log.entries_at(LogLevel::Warn), vec!["second".to_string()]);

        let json = log.export_json().unwrap();
        assert!(json.contains("\"Warn\""));
        assert!(json.contains("\"second\""));

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn counter_counts_and_resets() {
        let _guard = STATE_LOCK.lock().unwrap();

        let counter = HitCounter::global();
        counter.reset();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.decrement(), 1);
        assert_eq!(counter.get(), 1);
        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn injected_settings_stay_local() {
        let settings = AppSettings {
            greeting: "Hey".to_string(),
        };
        let greeter = Greeter::new(&settings);
        assert_eq!(greeter.greet("test"), "Hey, test!");
    }
}

fn main() {
    println!("Pattern 4: Singletons");
    println!("======================\n");

    println!("=== Config Store (OnceLock) ===");
    config_store_example();
    println!();

    println!("=== Leveled Logger (lazy_static) ===");
    logger_example();
    println!();

    println!("=== Hit Counter (function-local OnceLock) ===");
    hit_counter_example();
    println!();

    println!("=== Dependency Injection Contrast ===");
    dependency_injection_example();
}
