use svg_units::{parse_length_list, ConversionContext, UnitKind, Value};

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    // RUST_LOG overrides the default level, e.g. RUST_LOG=trace to see every conversion
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let ctx = ConversionContext::builder()
        .set_font_size(14.0)
        .set_viewport(1280.0, 720.0)
        .set_reference_length(640.0)
        .build()?;
    log::info!("Using conversion context {:?}", ctx.resolve());

    for literal in ["19.6679in", "200.234px", "12", "2.5em", "50%", "10vmin", "3pc"] {
        let value = Value::parse(literal)?;
        let px = value.in_pixels(&ctx)?;
        let mm = value.converted_to(UnitKind::Mm, &ctx)?;
        log::info!("{:>10} = {:>12.4}px = {}", value, px, mm);
    }

    // Bad literals are reported, not fatal.
    for literal in ["abc", "12zz", "1.2.3cm"] {
        match Value::parse(literal) {
            Ok(value) => log::info!("{} parsed as {}", literal, value),
            Err(e) => log::warn!("Skipping '{}': {}", literal, e),
        }
    }

    let dashes = parse_length_list("4, 2mm 1em")?;
    let dash_px = dashes
        .iter()
        .map(|v| v.in_pixels(&ctx))
        .collect::<Result<Vec<f64>, _>>()?;
    log::info!("stroke-dasharray in px: {:?}", dash_px);

    Ok(())
}
