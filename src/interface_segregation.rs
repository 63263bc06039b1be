//! Interface Segregation: small contracts instead of one wide one.
//!
//! Networking and printing are separate traits. `ComputerDevice` supports
//! both, but code that only needs the network asks for a
//! `&dyn NetworkConnector` and never sees printing.

use crate::config::PrinterConfig;
use crate::console::Console;

// =============================================================================
// Contracts
// =============================================================================

pub trait NetworkConnector {
    fn establish_network_connection(&self);
    fn terminate_network_connection(&self);
}

pub trait PrinterConnector {
    fn establish_printer_connection(&self);
    fn terminate_printer_connection(&self);
    fn print_document(&self, document: &str);
}

// =============================================================================
// A device that supports both
// =============================================================================

pub struct ComputerDevice<C: Console> {
    console: C,
}

impl<C: Console> ComputerDevice<C> {
    pub fn new(console: C) -> Self {
        ComputerDevice { console }
    }
}

impl<C: Console> NetworkConnector for ComputerDevice<C> {
    fn establish_network_connection(&self) {
        self.console.write_line("Connected to network");
    }

    fn terminate_network_connection(&self) {
        self.console.write_line("Disconnected from network");
    }
}

impl<C: Console> PrinterConnector for ComputerDevice<C> {
    fn establish_printer_connection(&self) {
        self.console.write_line("Connected to printer");
    }

    fn terminate_printer_connection(&self) {
        self.console.write_line("Disconnected from printer");
    }

    fn print_document(&self, document: &str) {
        tracing::debug!(document, "printing");
        self.console.write_line(&format!("Printing document: {document}"));
    }
}

// =============================================================================
// Consumers that depend on one contract each
// =============================================================================

/// Opens and closes a network session. Printing is out of reach.
pub fn cycle_network(network: &dyn NetworkConnector) {
    network.establish_network_connection();
    network.terminate_network_connection();
}

/// Prints each document inside a single printer connection.
pub fn print_all(printer: &dyn PrinterConnector, documents: &[&str]) {
    printer.establish_printer_connection();
    for document in documents {
        printer.print_document(document);
    }
    printer.terminate_printer_connection();
}

pub const SUMMARY: &str = "NetworkConnector covers connecting to a network and \
PrinterConnector covers connecting to a printer and printing. ComputerDevice \
implements both, yet each caller depends only on the contract it actually uses.";

pub fn run(console: &dyn Console, config: &PrinterConfig) {
    let computer = ComputerDevice::new(console);
    computer.establish_network_connection();
    computer.establish_printer_connection();
    computer.print_document(&config.document);

    computer.terminate_network_connection();
    computer.terminate_printer_connection();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use std::cell::Cell;

    #[test]
    fn test_driver_writes_five_lines_in_order() {
        let transcript = Transcript::new();
        run(&transcript, &PrinterConfig::default());

        assert_eq!(
            transcript.lines(),
            vec![
                "Connected to network",
                "Connected to printer",
                "Printing document: Test document",
                "Disconnected from network",
                "Disconnected from printer",
            ]
        );
    }

    #[test]
    fn test_network_consumer_sees_no_printing() {
        let transcript = Transcript::new();
        let computer = ComputerDevice::new(&transcript);

        cycle_network(&computer);

        let lines = transcript.lines();
        assert_eq!(lines, vec!["Connected to network", "Disconnected from network"]);
        assert!(lines.iter().all(|line| !line.contains("print")));
    }

    #[test]
    fn test_print_all_wraps_documents_in_one_connection() {
        let transcript = Transcript::new();
        let computer = ComputerDevice::new(&transcript);

        print_all(&computer, &["a.txt", "b.txt"]);

        assert_eq!(
            transcript.lines(),
            vec![
                "Connected to printer",
                "Printing document: a.txt",
                "Printing document: b.txt",
                "Disconnected from printer",
            ]
        );
    }

    #[test]
    fn test_network_only_device_is_accepted() {
        // Implements just one contract; nothing forces it to stub printing.
        #[derive(Default)]
        struct Router {
            connections: Cell<u32>,
        }

        impl NetworkConnector for Router {
            fn establish_network_connection(&self) {
                self.connections.set(self.connections.get() + 1);
            }

            fn terminate_network_connection(&self) {
                self.connections.set(self.connections.get() - 1);
            }
        }

        let router = Router::default();
        router.establish_network_connection();
        assert_eq!(router.connections.get(), 1);

        cycle_network(&router);
        assert_eq!(router.connections.get(), 1);
    }
}
