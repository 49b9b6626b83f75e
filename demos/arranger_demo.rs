use arithmetic_arranger::{arrange_message, validate_batch};

fn main() {
    println!("=== Arithmetic Arranger Demo ===");

    let batches: [&[&str]; 4] = [
        &["32 + 698", "3801 - 2", "45 + 43", "123 + 49"],
        &["3 + 855", "988 + 40"],
        &["1 + 2", "1 - 9380", "12 * 3"],
        &["98 + 3g5", "3801 - 2", "45 + 43", "123 + 49"],
    ];

    for batch in batches {
        println!("\nInput: {:?}", batch);
        println!("{}", arrange_message(batch, true));

        for diagnostic in validate_batch(batch).diagnostics {
            println!("  {}", diagnostic.message());
        }
    }
}
