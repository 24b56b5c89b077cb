#[cfg(test)]
mod tests {
    use crate::disassembler::{
        disassemble_words, BlankLines, Disassembler, OutputOptions, Summary,
    };
    use crate::input::InputMode;
    use test_log::test;

    fn run(input: &str, options: OutputOptions, blank_lines: BlankLines) -> (String, Summary) {
        let mut disasm = Disassembler::new(options);
        let mut output = Vec::new();
        let summary = disasm
            .run(input.as_bytes(), &mut output, blank_lines)
            .unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_full_listing_line() {
        let (output, summary) = run("1042\n", OutputOptions::default(), BlankLines::Skip);
        assert_eq!(output, "x3000 | x1042 | 0001000001000010 | ADD    R0 R1 R2\n");
        assert_eq!(
            summary,
            Summary {
                decoded: 1,
                rejected: 0
            }
        );
    }

    #[test]
    fn test_assembly_only() {
        let options = OutputOptions {
            assembly_only: true,
            ..OutputOptions::default()
        };
        let (output, _) = run("F025\nC000\n", options, BlankLines::Skip);
        assert_eq!(output, "TRAP   x25\nRET\n");
    }

    #[test]
    fn test_address_advances_over_invalid_lines() {
        let options = OutputOptions {
            origin: 0x4000,
            ..OutputOptions::default()
        };
        let (output, summary) = run("0000\nnope\n8000\n", options, BlankLines::Skip);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("x4000 | x0000 |"));
        assert_eq!(lines[1], "Invalid opcode: nope");
        assert!(lines[2].starts_with("x4002 | x8000 |"));
        assert_eq!(summary.decoded, 2);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn test_blank_lines_skipped_in_files() {
        let options = OutputOptions {
            assembly_only: true,
            ..OutputOptions::default()
        };
        let mut disasm = Disassembler::new(options);
        let mut output = Vec::new();
        disasm
            .run("8000\n\n\r\nC000\n".as_bytes(), &mut output, BlankLines::Skip)
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "RTI\nRET\n");
        // Blank lines do not take an address
        assert_eq!(disasm.address(), 0x3002);
    }

    #[test]
    fn test_blank_line_stops_stdin() {
        let options = OutputOptions {
            assembly_only: true,
            ..OutputOptions::default()
        };
        let (output, summary) = run("8000\n\nC000\n", options, BlankLines::Stop);
        assert_eq!(output, "RTI\n");
        assert_eq!(summary.decoded, 1);
    }

    #[test]
    fn test_binary_input_and_crlf() {
        let options = OutputOptions {
            input_mode: InputMode::Binary,
            assembly_only: true,
            ..OutputOptions::default()
        };
        let (output, _) = run(
            "0001000001000010\r\n1111000000100101",
            options,
            BlankLines::Skip,
        );
        assert_eq!(output, "ADD    R0 R1 R2\nTRAP   x25\n");
    }

    #[test]
    fn test_address_wraps() {
        let options = OutputOptions {
            origin: 0xFFFF,
            ..OutputOptions::default()
        };
        let lines = disassemble_words(&[0xC000, 0x8000], options);
        assert!(lines[0].starts_with("xFFFF | xC000 |"));
        assert!(lines[1].starts_with("x0000 | x8000 |"));
    }

    #[test]
    fn test_same_word_same_rendering() {
        let options = OutputOptions {
            assembly_only: true,
            ..OutputOptions::default()
        };
        let lines = disassemble_words(&[0x0BFE, 0x0BFE], options);
        assert_eq!(lines[0], "BRnp   [OFFSET -2]");
        assert_eq!(lines[0], lines[1]);
    }
}
