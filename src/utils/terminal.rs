use std::io::{self, IsTerminal, Write};

const CLEAR_SEQUENCE: &[u8] = b"\x1B[2J\x1B[1;1H";

/// stdout 是否為互動終端
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// 清除畫面並把游標移到左上角
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SEQUENCE)?;
    out.flush()
}
