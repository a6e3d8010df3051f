//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `bbp_pi` package `README.md`.

fn main() {
    use bbp_pi::{RunInput, TermCount, partial_sums, run};

    // Watch the series converge, one term at a time.
    for (index, sum) in partial_sums(12).enumerate() {
        println!("after {} terms: {sum:?}", index + 1);
    }

    // Sum the default number of terms and report it the same way the binary does.
    let outcome = run(&RunInput {
        term_count: TermCount::DEFAULT,
    });

    println!("{}", outcome.render());
}
