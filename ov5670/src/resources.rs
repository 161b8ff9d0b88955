//! GPIOs, supplies and the clock the sensor needs, fetched from the platform.

use core::fmt::Debug;

use embedded_hal::digital::OutputPin;
use heapless::Vec;

use crate::Error;

/// GPIOs on the INT3472 device describing the module wiring: xshutdn, pwdnb and led.
pub const WIRING_GPIO_COUNT: usize = 3;
pub const PMIC_GPIO_COUNT: usize = 10;
pub const SUPPLY_COUNT: usize = 7;

pub const PMIC_GPIO_CHIP: &str = "tps68470-gpio";
pub const CLOCK_NAME: &str = "tps68470-clk";
pub const SUPPLY_NAMES: [&str; SUPPLY_COUNT] = ["CORE", "ANA", "VCM", "VIO", "VSIO", "AUX1", "AUX2"];

/// One entry of a GPIO lookup table, mapping a connection id on the sensor to a PMIC line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioLookup {
    pub chip: &'static str,
    pub chip_hwnum: u16,
    pub con_id: &'static str,
    pub idx: u16,
    pub active_low: bool,
}

const fn pmic_gpio(chip_hwnum: u16, con_id: &'static str) -> GpioLookup {
    GpioLookup {
        chip: PMIC_GPIO_CHIP,
        chip_hwnum,
        con_id,
        idx: 0,
        active_low: false,
    }
}

/// TPS68470 lines routed to the sensor module.
pub static PMIC_GPIOS: [GpioLookup; PMIC_GPIO_COUNT] = [
    pmic_gpio(0, "gpio.0"),
    pmic_gpio(1, "gpio.1"),
    pmic_gpio(2, "gpio.2"),
    pmic_gpio(3, "gpio.3"),
    pmic_gpio(4, "gpio.4"),
    pmic_gpio(5, "gpio.5"),
    pmic_gpio(6, "gpio.6"),
    pmic_gpio(7, "s_enable"),
    pmic_gpio(8, "s_idle"),
    pmic_gpio(9, "s_resetn"),
];

/// Names the handle an operation failed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    /// Index into the INT3472 GPIO list
    WiringGpio(u8),
    LookupTable,
    PmicGpio(&'static str),
    /// Sensor-side power GPIOs
    SensorGpio,
    Supply(&'static str),
    Clock,
}

/// A voltage supply.
pub trait Regulator {
    type Error: Debug;
    fn enable(&mut self) -> Result<(), Self::Error>;
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// A gateable clock with a programmable rate.
pub trait Clock {
    type Error: Debug;
    fn set_rate(&mut self, hz: u32) -> Result<(), Self::Error>;
    /// Rate the clock actually runs at.
    fn rate(&self) -> u32;
    fn prepare_enable(&mut self) -> Result<(), Self::Error>;
    fn disable_unprepare(&mut self);
}

/// Hands out the sensor's power resources. `D` identifies a device on the platform.
///
/// Every handle returned by a `*_get` method must be given back with the matching `*_put`.
pub trait ResourceProvider<D> {
    type Gpio: OutputPin;
    type Regulator: Regulator;
    type Clock: Clock;
    type Error: Debug;

    /// GPIO `index` from the device's firmware resources, configured as output low.
    fn gpio_get_index(&mut self, device: D, index: u8) -> Result<Self::Gpio, Self::Error>;
    /// GPIO by connection id, resolved through the registered lookup tables, as output low.
    fn gpio_get(&mut self, device: D, con_id: &'static str) -> Result<Self::Gpio, Self::Error>;
    fn gpio_put(&mut self, gpio: Self::Gpio);

    fn add_lookup_table(
        &mut self,
        device: D,
        table: &'static [GpioLookup],
    ) -> Result<(), Self::Error>;
    fn remove_lookup_table(&mut self, device: D, table: &'static [GpioLookup]);

    fn regulator_get(
        &mut self,
        device: D,
        supply: &'static str,
    ) -> Result<Self::Regulator, Self::Error>;
    fn regulator_put(&mut self, regulator: Self::Regulator);

    fn clk_get(&mut self, device: D, name: &'static str) -> Result<Self::Clock, Self::Error>;
    fn clk_put(&mut self, clock: Self::Clock);
}

/// Everything acquired for one sensor.
///
/// Handles are kept in acquisition order and released last-first.
pub struct DeviceResources<G, R, C> {
    pub(crate) wiring: Vec<G, WIRING_GPIO_COUNT>,
    pub(crate) pmic: Vec<G, PMIC_GPIO_COUNT>,
    pub(crate) supplies: Vec<R, SUPPLY_COUNT>,
    pub(crate) clock: Option<C>,
    lookup_registered: bool,
}

impl<G, R, C> Default for DeviceResources<G, R, C> {
    fn default() -> Self {
        Self {
            wiring: Vec::new(),
            pmic: Vec::new(),
            supplies: Vec::new(),
            clock: None,
            lookup_registered: false,
        }
    }
}

impl<G: OutputPin, R: Regulator, C: Clock> DeviceResources<G, R, C> {
    /// Acquires all resources, or none of them.
    ///
    /// Wiring GPIOs come from the `dependent` INT3472 device, everything else is looked up on
    /// the `sensor` device.
    pub fn acquire<D, P, E>(
        provider: &mut P,
        sensor: D,
        dependent: D,
        clock_hz: u32,
    ) -> Result<Self, Error<E>>
    where
        D: Copy,
        P: ResourceProvider<D, Gpio = G, Regulator = R, Clock = C>,
    {
        let mut res = Self::default();
        match res.acquire_all(provider, sensor, dependent, clock_hz) {
            Ok(()) => Ok(res),
            Err(e) => {
                res.release_all(provider, sensor);
                Err(e)
            }
        }
    }

    fn acquire_all<D, P, E>(
        &mut self,
        provider: &mut P,
        sensor: D,
        dependent: D,
        clock_hz: u32,
    ) -> Result<(), Error<E>>
    where
        D: Copy,
        P: ResourceProvider<D, Gpio = G, Regulator = R, Clock = C>,
    {
        for index in 0..WIRING_GPIO_COUNT as u8 {
            let resource = Resource::WiringGpio(index);
            let gpio = provider.gpio_get_index(dependent, index).map_err(|_| {
                error!("Failed to get wiring GPIO {}", index);
                Error::<E>::ResourceUnavailable(resource)
            })?;
            if let Err(gpio) = self.wiring.push(gpio) {
                provider.gpio_put(gpio);
                return Err(Error::ResourceUnavailable(resource));
            }
        }

        provider
            .add_lookup_table(sensor, &PMIC_GPIOS)
            .map_err(|_| Error::<E>::ResourceUnavailable(Resource::LookupTable))?;
        self.lookup_registered = true;

        for lookup in PMIC_GPIOS.iter() {
            let resource = Resource::PmicGpio(lookup.con_id);
            let gpio = provider.gpio_get(sensor, lookup.con_id).map_err(|_| {
                error!("Failed to get PMIC GPIO {}", lookup.con_id);
                Error::<E>::ResourceUnavailable(resource)
            })?;
            if let Err(gpio) = self.pmic.push(gpio) {
                provider.gpio_put(gpio);
                return Err(Error::ResourceUnavailable(resource));
            }
        }

        for name in SUPPLY_NAMES {
            let resource = Resource::Supply(name);
            let regulator = provider.regulator_get(sensor, name).map_err(|_| {
                error!("Failed to get supply {}", name);
                Error::<E>::ResourceUnavailable(resource)
            })?;
            if let Err(regulator) = self.supplies.push(regulator) {
                provider.regulator_put(regulator);
                return Err(Error::ResourceUnavailable(resource));
            }
        }

        let clock = self.clock.insert(provider.clk_get(sensor, CLOCK_NAME).map_err(|_| {
            error!("Failed to get clock {}", CLOCK_NAME);
            Error::<E>::ResourceUnavailable(Resource::Clock)
        })?);
        clock.set_rate(clock_hz).map_err(|_| {
            error!("Failed to set clock rate {}", clock_hz);
            Error::<E>::ResourceUnavailable(Resource::Clock)
        })?;
        let actual = clock.rate();
        if actual != clock_hz {
            error!("Clock rate mismatch: wanted {}, got {}", clock_hz, actual);
            return Err(Error::ClockRateMismatch {
                requested: clock_hz,
                actual,
            });
        }

        debug!("Acquired sensor resources");
        Ok(())
    }

    /// Gives everything back in reverse acquisition order. Safe to call on a partial set.
    pub fn release_all<D: Copy, P>(&mut self, provider: &mut P, sensor: D)
    where
        P: ResourceProvider<D, Gpio = G, Regulator = R, Clock = C>,
    {
        if let Some(clock) = self.clock.take() {
            provider.clk_put(clock);
        }
        while let Some(regulator) = self.supplies.pop() {
            provider.regulator_put(regulator);
        }
        while let Some(gpio) = self.pmic.pop() {
            provider.gpio_put(gpio);
        }
        if self.lookup_registered {
            provider.remove_lookup_table(sensor, &PMIC_GPIOS);
            self.lookup_registered = false;
        }
        while let Some(gpio) = self.wiring.pop() {
            provider.gpio_put(gpio);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wiring.is_empty()
            && self.pmic.is_empty()
            && self.supplies.is_empty()
            && self.clock.is_none()
            && !self.lookup_registered
    }
}
