use splinetrail::config::Config;
use splinetrail::draw::svg::document;
use splinetrail::DrawRange;

fn main() {
    let config = Config::default();
    let mut recorder = config.recorder();
    let mut instance = config.instance();

    // A spiral drawn at 100 events per second, with a pause in the middle
    recorder.begin();
    for i in 0..300 {
        let t = i as f64 * 0.01 + if i >= 150 { 0.5 } else { 0.0 };
        let r = 10.0 + 0.25 * i as f64;
        let angle = 0.05 * i as f64;
        let accepted = recorder.add_point(100.0 + r * angle.cos(), 100.0 + r * angle.sin(), t);
        if !accepted.is_empty() && recorder.is_fittable() {
            if let Ok(curve) = recorder.curve() {
                instance.update_curve(curve);
            }
        }
    }
    recorder.end();

    let mut uniforms = config.uniforms();
    uniforms.cycle = 0.3;
    instance.update_uniforms(uniforms);
    instance.set_draw_range(DrawRange::new(0.1, 0.9));

    match instance.frame() {
        Some(frame) => println!("{}", document(&frame, 5.0)),
        None => eprintln!("nothing to draw"),
    }
}
