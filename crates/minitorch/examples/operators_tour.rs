//! Operator and Combinator Tour
//!
//! This example walks through the scalar operators and list combinators:
//! - Forward operators and numeric booleans
//! - Backward operators as used by a reverse-mode engine
//! - Composing combinators into list utilities
//! - Propagating division-by-zero failures
//!
//! Each scenario includes the expected output as comments.

use minitorch::prelude::*;

fn main() -> Result<(), OperatorError> {
    println!("{}", "=".repeat(60));
    println!("minitorch - Operator and Combinator Tour");
    println!("{}", "=".repeat(60));
    println!();

    example_1_forward_operators();
    example_2_backward_operators()?;
    example_3_combinators();
    example_4_error_propagation();

    Ok(())
}

/// Example 1: Forward operators
fn example_1_forward_operators() {
    println!("Example 1: Forward operators");
    println!("{}", "-".repeat(60));

    for x in [-2.0f64, 0.0, 2.0] {
        println!(
            "  x = {x:5.1}  sigmoid = {:.6}  relu = {:.1}  log = {:.6}",
            sigmoid(x),
            relu(x),
            log(x)
        );
    }
    // x =  -2.0  sigmoid = 0.119203  relu = 0.0  log = NaN
    // x =   0.0  sigmoid = 0.500000  relu = 0.0  log = -13.815511
    // x =   2.0  sigmoid = 0.880797  relu = 2.0  log = 0.693148

    println!("  lt(1, 2) = {}  is_close(1, 1.005) = {}", lt(1.0, 2.0), is_close(1.0, 1.005));
    // lt(1, 2) = 1  is_close(1, 1.005) = 1
    println!();
}

/// Example 2: Backward operators for `y = log(sigmoid(x))`
fn example_2_backward_operators() -> Result<(), OperatorError> {
    println!("Example 2: Backward pass of log(sigmoid(x))");
    println!("{}", "-".repeat(60));

    let x = 0.3f64;
    let s = sigmoid(x);
    let d_s = log_back(s, 1.0)?;
    let d_x = sigmoid_back(x, d_s);

    println!("  x = {x}  dy/dx = {d_x:.6}  (1 - sigmoid(x) = {:.6})", 1.0 - s);
    // x = 0.3  dy/dx = 0.425556  (1 - sigmoid(x) = 0.425557)
    println!();
    Ok(())
}

/// Example 3: Combinators and derived list utilities
fn example_3_combinators() {
    println!("Example 3: Combinators");
    println!("{}", "-".repeat(60));

    let xs = [1.0, -2.0, 3.0];
    let ys = [4.0, 5.0];

    println!("  map(v * 2)   = {:?}", map(|v: f64| v * 2.0)(&xs));
    println!("  zip_with(add) = {:?}", zip_with(add::<f64>)(&xs, &ys));
    println!("  neg_list     = {:?}", neg_list(&xs));
    println!("  sum          = {}", sum(&xs));
    println!("  prod         = {}", prod(&xs));
    // map(v * 2)   = [2.0, -4.0, 6.0]
    // zip_with(add) = [5.0, 3.0]
    // neg_list     = [-1.0, 2.0, -3.0]
    // sum          = 2
    // prod         = -6
    println!();
}

/// Example 4: Division by zero is reported, never recovered
fn example_4_error_propagation() {
    println!("Example 4: Error propagation");
    println!("{}", "-".repeat(60));

    match try_map(inv::<f64>)(&[2.0, 0.0, 4.0]) {
        Ok(values) => println!("  reciprocals = {values:?}"),
        Err(e) => println!("  failed: {e}"),
    }
    // failed: Division by zero in operator 'inv'
    println!();
}
