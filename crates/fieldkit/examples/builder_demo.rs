use fieldkit::prelude::*;
use fieldkit::SequentialIds;

fn main() {
    let mut ids = SequentialIds::new();
    let classes = ClassNames::default();

    let fields = [
        input("Email")
            .input_type("email")
            .placeholder("you@example.com")
            .required(true),
        textarea("Message").rows(5).max_length(500),
        radio("Plan")
            .group_required(true)
            .option("monthly", "Monthly")
            .option("annual", "Annual"),
    ];

    for field in fields {
        match field.render_with(&mut ids, &classes) {
            Ok(rendered) => match rendered.element.to_json() {
                Ok(json) => println!("{}\n{}", rendered.id, json),
                Err(e) => eprintln!("✗ Error: {}", e),
            },
            Err(e) => eprintln!("✗ Error: {}", e),
        }
    }
}
