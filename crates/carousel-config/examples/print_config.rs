/// Example program to print the loaded configuration
///
/// Run with: cargo run -p carousel-config --example print_config

fn main() {
    let config = carousel_config::CarouselConfig::load();

    println!("=== Carousel Configuration ===\n");

    println!("Timing:");
    println!("  Tick Interval: {} ms", config.timing.tick_interval_ms);
    println!("  Transition: {} ms", config.timing.transition_ms);
    println!("  Hover: {} ms", config.timing.hover_ms);
    println!("  Autoplay: {}", config.timing.autoplay);
    println!();

    println!("Motion:");
    println!("  Easing: {}", config.motion.easing);
    println!("  Left: {:?} -> {:?}", config.motion.left.from, config.motion.left.to);
    println!("  Center: {:?} -> {:?}", config.motion.center.from, config.motion.center.to);
    println!("  Right: {:?} -> {:?}", config.motion.right.from, config.motion.right.to);
    println!();

    println!("Items:");
    for item in &config.items {
        println!("  #{} {}", item.id, item.media);
    }
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
