//! Monopage Demo Firmware
//!
//! Drives a 128x64 SSD1306 panel from an STM32F042K6 over I2C1
//! (PB6=SCL, PB7=SDA). Probes the panel, runs the power-up sequence,
//! draws the demo screen, then cycles the highlighted page label.

#![no_std]
#![no_main]

use core::fmt::Write as _;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c, Master};
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use monopage::demo::{render_demo, DEMO_LABELS};
use monopage::{DisplayConfig, Error, Ssd1306};
use monopage_hal::{HalI2c, I2cConfig};

type Bus = HalI2c<I2c<'static, Blocking, Master>>;
type Display = Ssd1306<Bus>;

/// Number of pages the label cycles through
const PAGE_COUNT: u8 = 3;

/// Label cycle interval
const CYCLE_MS: u64 = 1000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Monopage demo firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(I2cConfig::FAST.frequency);
    i2c_config.timeout = Duration::from_millis(100);

    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let mut display = Ssd1306::new(HalI2c::new(i2c), DisplayConfig::default());

    match display.probe() {
        Ok(()) => info!("OLED acknowledged at {=u8:#x}", display.config().address.seven_bit()),
        Err(e) => {
            error!("No OLED on the bus: {}", Bus::classify(&e));
            return;
        }
    }

    if let Err(e) = bring_up(&mut display) {
        log_error(&e);
        return;
    }
    info!("OLED initialized");

    spawner.spawn(display_task(display)).unwrap();
}

/// Power up the panel and draw the demo screen
fn bring_up(display: &mut Display) -> Result<(), Error<i2c::Error>> {
    display.initialize()?;
    display.clear_all()?;
    render_demo(display)
}

/// Label cycle task
#[embassy_executor::task]
async fn display_task(mut display: Display) {
    info!("Display task started");

    let selected = DEMO_LABELS[0];
    let mut ticker = Ticker::every(Duration::from_millis(CYCLE_MS));
    let mut page = 1u8;
    let mut label: heapless::String<8> = heapless::String::new();

    loop {
        ticker.next().await;
        page = page % PAGE_COUNT + 1;

        label.clear();
        if write!(label, "PAGE {}", page).is_err() {
            warn!("Label overflow");
            continue;
        }

        match display.draw_text(label.as_str(), selected.column, selected.page, true) {
            Ok(()) => trace!("Showing {}", label.as_str()),
            Err(e) => log_error(&e),
        }
    }
}

fn log_error(e: &Error<i2c::Error>) {
    match e {
        Error::Bus(bus) => warn!("Bus error: {}", Bus::classify(bus)),
        other => warn!("Display error: {}", other),
    }
}
