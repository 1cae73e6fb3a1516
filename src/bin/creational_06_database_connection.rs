//! Singleton exercise: one database connection, many handles
//!
//! The connection is built once and every consumer receives a clone of the
//! same `Rc` handle.
//!
//! Run with: cargo run --bin creational_06_database_connection

use std::cell::RefCell;
use std::rc::Rc;

use design_patterns::colors::{paint, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectionEvent {
    Connected,
    AlreadyConnected,
    Disconnected,
    NotConnected,
}

impl ConnectionEvent {
    fn message(self) -> String {
        let text = match self {
            ConnectionEvent::Connected => paint("Database has been connected", Palette::Green),
            ConnectionEvent::AlreadyConnected => {
                paint("We were already connected to the database", Palette::Cyan)
            }
            ConnectionEvent::Disconnected => paint("Database has been disconnected", Palette::Red),
            ConnectionEvent::NotConnected => {
                paint("There is not an active connection", Palette::Gray)
            }
        };
        text.to_string()
    }
}

#[derive(Debug, Default)]
struct DatabaseConnection {
    connected: bool,
}

type SharedConnection = Rc<RefCell<DatabaseConnection>>;

impl DatabaseConnection {
    fn shared() -> SharedConnection {
        Rc::new(RefCell::new(DatabaseConnection::default()))
    }

    fn connect(&mut self) -> ConnectionEvent {
        if self.connected {
            return ConnectionEvent::AlreadyConnected;
        }
        self.connected = true;
        ConnectionEvent::Connected
    }

    fn disconnect(&mut self) -> ConnectionEvent {
        if !self.connected {
            return ConnectionEvent::NotConnected;
        }
        self.connected = false;
        ConnectionEvent::Disconnected
    }
}

fn main() {
    let db1 = DatabaseConnection::shared();
    println!("{}", db1.borrow_mut().connect().message());

    let db2 = Rc::clone(&db1);
    println!("{}", db2.borrow_mut().connect().message());

    println!("Are they the same instance: {}", Rc::ptr_eq(&db1, &db2));

    println!("{}", db1.borrow_mut().disconnect().message());
    println!("{}", db2.borrow_mut().connect().message());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_twice() {
        let mut db = DatabaseConnection::default();
        assert_eq!(db.connect(), ConnectionEvent::Connected);
        assert_eq!(db.connect(), ConnectionEvent::AlreadyConnected);
    }

    #[test]
    fn test_disconnect_without_connection() {
        let mut db = DatabaseConnection::default();
        assert_eq!(db.disconnect(), ConnectionEvent::NotConnected);
    }

    #[test]
    fn test_handles_share_state() {
        let db1 = DatabaseConnection::shared();
        let db2 = Rc::clone(&db1);

        db1.borrow_mut().connect();
        assert_eq!(db2.borrow_mut().connect(), ConnectionEvent::AlreadyConnected);

        db1.borrow_mut().disconnect();
        assert_eq!(db2.borrow_mut().connect(), ConnectionEvent::Connected);
        assert!(Rc::ptr_eq(&db1, &db2));
    }

    #[test]
    fn test_messages() {
        colored::control::set_override(false);
        assert_eq!(
            ConnectionEvent::NotConnected.message(),
            "There is not an active connection"
        );
    }
}
