//! Apply a `Runner` trait to a `User` class and call the copied members.
//!
//! Run with logging to watch the copier work:
//! ```bash
//! RUST_LOG=trace cargo run --example runner
//! ```

use mixweave::{apply_trait, ClassDef, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // the trait: methods and accessors only, no data members
    let mut runner = ClassDef::new("Runner");
    runner.define_method("run", |inst, _| {
        let username = inst.field("username").cloned().unwrap_or_default();
        Value::str(format!("{} runs", username))
    });
    runner.define_static_method("describe", |class, _| {
        Value::str(format!("{} can run", class.name()))
    });

    // the destination declares its own state
    let mut user = ClassDef::new("User");
    user.set_constructor(1, |inst, args| {
        inst.set_field("username", args[0].clone());
    });

    apply_trait::<&str>(&runner, &mut user, &[])?;

    println!("{}", user.call_static("describe", &[])?);

    let mut virk = user.instantiate(&[Value::str("virk")])?;
    println!("{}", user.call(&mut virk, "run", &[])?);

    Ok(())
}
