use anyhow::{Context, Result};
use carousel_config::CarouselConfig;
use carousel_scene::{CarouselScene, CarouselSettings, Slot};

/// Scripted pointer input for the headless run.
#[derive(Debug, Clone, Copy)]
enum PointerStep {
    MoveTo([f32; 2]),
    Leave,
}

fn pointer_script(settings: &CarouselSettings) -> Vec<(f32, PointerStep)> {
    let center_path = settings.motion.path(Slot::Center);
    let hover_point = settings
        .layout
        .card_rect(Slot::Center, center_path.to)
        .center();
    vec![
        (4000.0, PointerStep::MoveTo(hover_point)),
        (7000.0, PointerStep::Leave),
    ]
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = CarouselConfig::load();
    let settings =
        CarouselSettings::from_config(&config).context("invalid carousel configuration")?;

    let mut script = if config.demo.scripted_pointer {
        pointer_script(&settings)
    } else {
        Vec::new()
    };
    script.reverse();

    let frame_ms = config.demo.frame_ms.max(1.0);
    let mut scene = CarouselScene::new(settings);
    scene.mount();
    println!("{}", serde_json::to_string(&scene.views())?);

    let mut now = 0.0_f32;
    let mut last_center = scene.controller().center_index();
    let mut frames = 0u64;
    while now < config.demo.duration_ms {
        now += frame_ms;
        frames += 1;

        while script.last().is_some_and(|(at, _)| *at <= now) {
            let Some((_, step)) = script.pop() else {
                break;
            };
            match step {
                PointerStep::MoveTo([x, y]) => {
                    log::info!("t={now:.0}ms pointer over ({x:.0}, {y:.0})");
                    scene.pointer_moved(x, y);
                }
                PointerStep::Leave => {
                    log::info!("t={now:.0}ms pointer left");
                    scene.pointer_left();
                }
            }
        }

        scene.update(frame_ms);

        let center = scene.controller().center_index();
        if center != last_center {
            last_center = center;
            log::info!(
                "t={now:.0}ms center index {center}, active item {}",
                scene.controller().active_item().id
            );
            println!("{}", serde_json::to_string(&scene.views())?);
        }
    }

    log::info!(
        "ran {frames} frames, {} advances",
        scene.controller().advances()
    );
    scene.unmount();
    Ok(())
}
