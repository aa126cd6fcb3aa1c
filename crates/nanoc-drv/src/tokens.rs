//! `--dump-tokens` debug output.
//!
//! Ground: `print_tokens` in `original_source/src/main.c`, which the
//! original ran unconditionally before every compile. Reproduced here
//! as an explicit opt-in so a normal build produces only the assembly
//! output spec.md's external interface promises.

use nanoc_lex::Lexer;

pub fn dump_tokens(source: &str) {
    println!("\nSource contents:\n{source}\n");
    println!("Tokenizing source...\n");

    let mut lexer = Lexer::new(source);
    let mut count = 0;
    loop {
        let token = lexer.next_token();
        count += 1;
        println!(
            "Token {count}: Type: {:<15} Line: {} Column: {}",
            token.token.to_string(),
            token.span.line,
            token.span.column
        );
        if token.token.is_eof() {
            break;
        }
    }

    println!("\nFinished tokenizing.\n");
}
