use curlview::repl::{
    MockLineStream, ReplController, SessionStats, CONTINUATION_PROMPT, PROMPT,
};
use curlview::{FormatOptions, ParseOptions};

fn run_session(stream: MockLineStream) -> (SessionStats, Vec<String>, String, usize) {
    let mut output = Vec::new();
    let (stats, prompts, remaining) = {
        let mut repl = ReplController::with_io_streams(
            ParseOptions::default(),
            FormatOptions::default(),
            stream,
            &mut output,
        );
        let stats = repl.run().unwrap();
        (
            stats,
            repl.line_stream().prompts().to_vec(),
            repl.line_stream().remaining(),
        )
    };
    (stats, prompts, String::from_utf8(output).unwrap(), remaining)
}

#[test]
fn test_scripted_session() {
    let mut stream = MockLineStream::new(["curl https://x.com -X DELETE"]);
    stream.push_line("curl https://x.com -H");
    stream.push_line("curl https://x.com \\");
    stream.push_line("-d a \\");
    stream.push_line("-d b");
    stream.push_line("quit");
    stream.push_line("curl never-read.com");

    let (stats, prompts, output, remaining) = run_session(stream);

    assert_eq!(stats, SessionStats { parsed: 2, failed: 1 });
    assert_eq!(
        prompts,
        vec![
            PROMPT,
            PROMPT,
            PROMPT,
            CONTINUATION_PROMPT,
            CONTINUATION_PROMPT,
            PROMPT
        ]
    );
    assert_eq!(remaining, 1);
    assert!(output.contains("Method:\n  DELETE\n"), "{output}");
    assert!(output.contains("Error: Flag '-H' requires an argument\n"), "{output}");
    assert!(output.contains("Body/Data:\n  a & b\n"), "{output}");
    assert!(!output.contains("never-read.com"), "{output}");
}

#[test]
fn test_session_ends_at_end_of_input() {
    let (stats, _, output, remaining) = run_session(MockLineStream::new(["curl https://x.com"]));
    assert_eq!(stats.parsed, 1);
    assert_eq!(remaining, 0);
    assert!(output.ends_with("Method:\n  GET\n\n"), "{output}");
}

#[test]
fn test_continuation_cut_short_by_end_of_input() {
    let mut stream = MockLineStream::default();
    stream.push_line("curl https://x.com -X PUT \\");

    let (stats, prompts, output, _) = run_session(stream);
    assert_eq!(stats.parsed, 1);
    assert_eq!(prompts, vec![PROMPT, CONTINUATION_PROMPT, PROMPT]);
    assert!(output.contains("Method:\n  PUT\n"), "{output}");
}
