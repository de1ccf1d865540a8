use std::io;

use quince_chess::uci::uci_top::run_stdio_loop;

fn main() -> io::Result<()> {
    run_stdio_loop()
}
