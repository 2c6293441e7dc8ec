//! Startup splash: project name plus the discovered address of the control
//! page, or a "No Network" fallback when discovery failed.

use std::net::IpAddr;

use crate::render::canvas::Canvas;
use crate::render::text::{Anchor, FontBook};
use crate::render::{AXIS, BG, CYAN, RED};

const TITLE: &str = "Fieldscope";

pub fn render(ip: Option<IpAddr>, port: u16, fonts: &FontBook) -> Canvas {
    let mut canvas = Canvas::filled(BG);

    fonts.draw(&mut canvas, TITLE, 120, 60, 20.0, false, AXIS, Anchor::Center);

    match ip {
        Some(ip) => {
            fonts.draw(&mut canvas, &ip.to_string(), 120, 120, 28.0, true, CYAN, Anchor::Center);
            fonts.draw(
                &mut canvas,
                &format!("http://{ip}:{port}"),
                120,
                160,
                16.0,
                false,
                AXIS,
                Anchor::Center,
            );
        }
        None => {
            fonts.draw(&mut canvas, "No Network", 120, 120, 20.0, false, RED, Anchor::Center);
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn title_matches_the_package_name() {
        assert!(TITLE.eq_ignore_ascii_case(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn splash_with_address_shows_cyan_ip() {
        let canvas = render(
            Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20))),
            5000,
            &FontBook::fallback(),
        );
        let cyan = (0..240)
            .flat_map(|y| (0..240).map(move |x| (x, y)))
            .any(|(x, y)| canvas.get(x, y) == Some(CYAN));
        assert!(cyan);
    }

    #[test]
    fn splash_without_address_warns_in_red() {
        let canvas = render(None, 5000, &FontBook::fallback());
        let red = (0..240)
            .flat_map(|y| (0..240).map(move |x| (x, y)))
            .any(|(x, y)| canvas.get(x, y) == Some(RED));
        assert!(red);
    }
}
