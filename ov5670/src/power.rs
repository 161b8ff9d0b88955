//! Power sequencing.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::resources::{
    Clock, DeviceResources, Regulator, Resource, ResourceProvider, PMIC_GPIOS, SUPPLY_NAMES,
};
use crate::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Off,
    PoweringUp,
    On,
    PoweringDown,
}

/// Drives the acquired resources through power-up and power-down.
pub struct Power<G, R, C> {
    res: DeviceResources<G, R, C>,
    state: PowerState,
    regulator_enabled: bool,
    clk_enabled: bool,
}

impl<G: OutputPin, R: Regulator, C: Clock> Power<G, R, C> {
    pub fn new(res: DeviceResources<G, R, C>) -> Self {
        Self {
            res,
            state: PowerState::Off,
            regulator_enabled: false,
            clk_enabled: false,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == PowerState::On
    }

    pub fn regulator_enabled(&self) -> bool {
        self.regulator_enabled
    }

    pub fn clk_enabled(&self) -> bool {
        self.clk_enabled
    }

    /// Powers down if needed and hands every resource back to `provider`.
    pub fn release<D: Copy, P>(&mut self, provider: &mut P, sensor: D)
    where
        P: ResourceProvider<D, Gpio = G, Regulator = R, Clock = C>,
    {
        if self.state != PowerState::Off {
            self.power_down();
        }
        self.res.release_all(provider, sensor);
    }

    /// Powers the sensor up, making up to `attempts` full down/up cycles.
    ///
    /// Returns the error of the last attempt if none succeeded. Does nothing if already on.
    pub async fn power_up<E, D: DelayNs>(
        &mut self,
        delay: &mut D,
        attempts: u8,
    ) -> Result<(), Error<E>> {
        if self.is_on() {
            return Ok(());
        }
        let mut attempt = 1;
        loop {
            self.power_down();
            match self.power_up_once(delay).await {
                Ok(()) => {
                    debug!("Sensor powered up after {} attempt(s)", attempt);
                    return Ok(());
                }
                Err(e) if attempt >= attempts => {
                    error!("Sensor power-up failed after {} attempts", attempt);
                    return Err(e);
                }
                Err(_) => {
                    warn!("Sensor power-up attempt {} failed, retrying", attempt);
                    attempt += 1;
                }
            }
        }
    }

    async fn power_up_once<E, D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<E>> {
        self.state = PowerState::PoweringUp;
        match self.sequence_up(delay).await {
            Ok(()) => {
                self.state = PowerState::On;
                Ok(())
            }
            Err(e) => {
                self.power_down();
                Err(e)
            }
        }
    }

    async fn sequence_up<E, D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<E>> {
        for (index, gpio) in self.res.wiring.iter_mut().enumerate() {
            gpio.set_high()
                .map_err(|_| Error::<E>::ResourceUnavailable(Resource::WiringGpio(index as u8)))?;
        }
        for (gpio, lookup) in self.res.pmic.iter_mut().zip(PMIC_GPIOS.iter()) {
            gpio.set_high()
                .map_err(|_| Error::<E>::ResourceUnavailable(Resource::PmicGpio(lookup.con_id)))?;
        }

        for index in 0..self.res.supplies.len() {
            if self.res.supplies[index].enable().is_err() {
                error!("Failed to enable supply {}", SUPPLY_NAMES[index]);
                for (regulator, name) in self.res.supplies[..index]
                    .iter_mut()
                    .zip(SUPPLY_NAMES)
                    .rev()
                {
                    if regulator.disable().is_err() {
                        warn!("Failed to disable supply {}", name);
                    }
                }
                return Err(Error::ResourceUnavailable(Resource::Supply(SUPPLY_NAMES[index])));
            }
        }
        self.regulator_enabled = true;

        let clock = self
            .res
            .clock
            .as_mut()
            .ok_or(Error::<E>::ResourceUnavailable(Resource::Clock))?;
        clock.prepare_enable().map_err(|_| {
            error!("Failed to enable clock");
            Error::<E>::ResourceUnavailable(Resource::Clock)
        })?;
        self.clk_enabled = true;

        delay.delay_ms(10).await;
        if !(self.sensor_gpio_ctrl(true) || self.sensor_gpio_ctrl(true)) {
            return Err(Error::ResourceUnavailable(Resource::SensorGpio));
        }
        delay.delay_ms(30).await;
        Ok(())
    }

    /// Best-effort power-down. Failures are logged and skipped.
    pub fn power_down(&mut self) {
        self.state = PowerState::PoweringDown;

        if !(self.sensor_gpio_ctrl(false) || self.sensor_gpio_ctrl(false)) {
            warn!("Failed to release sensor GPIOs");
        }
        if self.clk_enabled {
            if let Some(clock) = self.res.clock.as_mut() {
                clock.disable_unprepare();
            }
            self.clk_enabled = false;
        }
        if self.regulator_enabled {
            for (regulator, name) in self.res.supplies.iter_mut().zip(SUPPLY_NAMES).rev() {
                if regulator.disable().is_err() {
                    warn!("Failed to disable supply {}", name);
                }
            }
            self.regulator_enabled = false;
        }
        for (gpio, lookup) in self.res.pmic.iter_mut().zip(PMIC_GPIOS.iter()).rev() {
            if gpio.set_low().is_err() {
                warn!("Failed to lower PMIC GPIO {}", lookup.con_id);
            }
        }
        for (index, gpio) in self.res.wiring.iter_mut().enumerate().rev() {
            if gpio.set_low().is_err() {
                warn!("Failed to lower wiring GPIO {}", index);
            }
        }

        self.state = PowerState::Off;
    }

    /// Sensor-side GPIO control. These modules route every line through the PMIC, so there is
    /// nothing to drive here.
    fn sensor_gpio_ctrl(&mut self, _on: bool) -> bool {
        true
    }
}
