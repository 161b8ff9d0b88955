#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod acpi;
pub mod controls;
pub mod i2c;
pub mod mode;
pub mod power;
pub mod resources;
pub mod types;

#[cfg(test)]
mod mock;

use arbitrary_int::u20;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

use acpi::{AcpiNamespace, DependentDevice};
use controls::{ControlId, ControlInfo, Controls};
use i2c::Ov5670I2c;
use mode::{Format, FormatWhich, FrameSize, SupportedMode, SUPPORTED_MODES};
use power::Power;
use resources::{DeviceResources, ResourceProvider};
use types::{Cldb, Exposure, ModeSelect, SoftwareReset, Ssdb, TestPattern};

pub use mode::{Reg, MEDIA_BUS_FMT_SGRBG10_1X10};
pub use resources::Resource;

pub mod regs {
    pub const CHIP_ID: u16 = 0x300a;
    pub const CHIP_ID_VALUE: u32 = 0x005670;

    pub const MODE_SELECT: u16 = 0x0100;
    pub const SOFTWARE_RST: u16 = 0x0103;

    /// Frame length in lines, 16 bits
    pub const VTS: u16 = 0x380e;
    /// Exposure in 1/16 lines, 24 bits
    pub const EXPOSURE: u16 = 0x3500;
    pub const ANALOG_GAIN: u16 = 0x3508;
    pub const R_DGTL_GAIN: u16 = 0x5032;
    pub const G_DGTL_GAIN: u16 = 0x5034;
    pub const B_DGTL_GAIN: u16 = 0x5036;

    pub const TEST_PATTERN: u16 = 0x4303;
    pub const TEST_PATTERN_CTRL: u16 = 0x4320;
}

/// Frames to drop after stream start.
pub const NUM_OF_SKIP_FRAMES: u32 = 2;

/// 7-bit I2C address of the sensor.
pub const DEFAULT_ADDRESS: u8 = 0x36;

/// Low level register access.
#[allow(async_fn_in_trait)]
pub trait Interface {
    type Error;

    /// Reads a big-endian register of `len` (1 to 4) bytes.
    async fn read_reg(&mut self, address: u16, len: usize) -> Result<u32, Error<Self::Error>>;

    /// Writes the low `len` (1 to 4) bytes of `value`, big-endian.
    async fn write_reg(
        &mut self,
        address: u16,
        len: usize,
        value: u32,
    ) -> Result<(), Error<Self::Error>>;

    /// Writes 8-bit registers in order, stopping at the first failure.
    ///
    /// Registers written before the failure keep their new values.
    async fn write_reg_list(&mut self, regs: &[Reg]) -> Result<(), Error<Self::Error>> {
        for reg in regs {
            match self.write_reg(reg.address, 1, u32::from(reg.value)).await {
                Ok(()) => {}
                Err(Error::Io(source)) => {
                    error!("Failed to write reg {:#x}", reg.address);
                    return Err(Error::ConfigurationAborted {
                        address: reg.address,
                        source,
                    });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transfer failed
    Io(E),
    /// Register width outside 1..=4 bytes
    InvalidLength(usize),
    /// A register list stopped at `address`
    ConfigurationAborted { address: u16, source: E },
    NotFound,
    /// The sensor has no `_DEP` method
    NoDependency,
    /// Firmware returned an object of the wrong type
    Format,
    BufferTooSmall { len: usize, capacity: usize },
    ResourceUnavailable(Resource),
    ClockRateMismatch { requested: u32, actual: u32 },
    ChipIdMismatch(u32),
    InvalidArgument,
    ReadOnly,
    OutOfRange,
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "bus error: {e:?}"),
            Error::InvalidLength(len) => write!(f, "invalid register length {len}"),
            Error::ConfigurationAborted { address, source } => {
                write!(f, "register list aborted at {address:#06x}: {source:?}")
            }
            Error::NotFound => f.write_str("not found"),
            Error::NoDependency => f.write_str("no dependent devices"),
            Error::Format => f.write_str("unexpected ACPI object type"),
            Error::BufferTooSmall { len, capacity } => {
                write!(f, "firmware buffer of {len} bytes exceeds {capacity}")
            }
            Error::ResourceUnavailable(resource) => {
                write!(f, "resource unavailable: {resource:?}")
            }
            Error::ClockRateMismatch { requested, actual } => {
                write!(f, "clock runs at {actual} Hz, wanted {requested} Hz")
            }
            Error::ChipIdMismatch(id) => write!(f, "unexpected chip id {id:#08x}"),
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::ReadOnly => f.write_str("control is read-only"),
            Error::OutOfRange => f.write_str("value out of range"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Sensor input clock
    pub clock_hz: u32,
    /// Full power cycles tried before giving up
    pub power_up_attempts: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_hz: 19_200_000,
            power_up_attempts: 4,
        }
    }
}

type Dev<A> = <A as AcpiNamespace>::Device;
type PowerOf<A, P> = Power<
    <P as ResourceProvider<Dev<A>>>::Gpio,
    <P as ResourceProvider<Dev<A>>>::Regulator,
    <P as ResourceProvider<Dev<A>>>::Clock,
>;

/// OV5670 driver
///
/// Every operation holds the driver lock for its whole duration. Dropping an operation's future
/// half way leaves the sensor in an unknown state.
pub struct Ov5670<M: RawMutex, I, D, A: AcpiNamespace, P: ResourceProvider<Dev<A>>> {
    ssdb: Ssdb,
    cldb: Cldb,
    inner: Mutex<M, Inner<I, D, A, P>>,
}

struct Inner<I, D, A: AcpiNamespace, P: ResourceProvider<Dev<A>>> {
    bus: I,
    timer: D,
    binding: Binding<A, P>,
    config: Config,
    mode: &'static SupportedMode,
    try_format: Format,
    controls: Controls,
    streaming: bool,
    pm_usage: u32,
}

/// Everything the driver holds on the platform's behalf. Dropping it powers the sensor down and
/// releases the resources, then the dependent device.
struct Binding<A: AcpiNamespace, P: ResourceProvider<Dev<A>>> {
    acpi: A,
    provider: P,
    sensor: Dev<A>,
    dependent: Option<DependentDevice<Dev<A>>>,
    power: PowerOf<A, P>,
}

impl<A: AcpiNamespace, P: ResourceProvider<Dev<A>>> Drop for Binding<A, P> {
    fn drop(&mut self) {
        self.power.release(&mut self.provider, self.sensor);
        if let Some(dependent) = self.dependent.take() {
            dependent.release(&mut self.acpi);
        }
        debug!("OV5670 resources released");
    }
}

impl<M, S, D, A, P> Ov5670<M, Ov5670I2c<S>, D, A, P>
where
    M: RawMutex,
    S: I2c,
    D: DelayNs,
    A: AcpiNamespace,
    P: ResourceProvider<Dev<A>>,
{
    /// Creates a new OV5670 driver on I2C and probes the sensor.
    pub async fn probe_i2c(
        i2c: S,
        address: u8,
        timer: D,
        acpi: A,
        provider: P,
        sensor: Dev<A>,
        config: Config,
    ) -> Result<Self, Error<S::Error>> {
        trace!("Ov5670I2c::new");
        let bus = Ov5670I2c::new(i2c, address);
        Self::probe(bus, timer, acpi, provider, sensor, config).await
    }
}

impl<M, I, D, A, P> Ov5670<M, I, D, A, P>
where
    M: RawMutex,
    I: Interface,
    D: DelayNs,
    A: AcpiNamespace,
    P: ResourceProvider<Dev<A>>,
{
    /// Binds to `sensor`: reads its firmware descriptors, acquires its power resources and
    /// checks the chip id. The sensor is left powered down.
    ///
    /// On failure everything acquired is released again.
    pub async fn probe(
        mut bus: I,
        mut timer: D,
        mut acpi: A,
        mut provider: P,
        sensor: Dev<A>,
        config: Config,
    ) -> Result<Self, Error<I::Error>> {
        let handle = acpi.acpi_handle(sensor).ok_or(Error::<I::Error>::NotFound)?;
        let dependent = acpi::resolve_dependent_device::<_, I::Error>(&mut acpi, handle)?;

        let (ssdb, cldb) = match read_descriptors(&acpi, handle, dependent.device()) {
            Ok(descriptors) => descriptors,
            Err(e) => {
                dependent.release(&mut acpi);
                return Err(e);
            }
        };
        if ssdb.mclk_speed != config.clock_hz {
            info!(
                "SSDB mclk {} Hz, clocking at {} Hz",
                ssdb.mclk_speed,
                config.clock_hz
            );
        }

        let res = match DeviceResources::acquire(
            &mut provider,
            sensor,
            dependent.device(),
            config.clock_hz,
        ) {
            Ok(res) => res,
            Err(e) => {
                dependent.release(&mut acpi);
                return Err(e);
            }
        };

        let mut binding = Binding {
            acpi,
            provider,
            sensor,
            dependent: Some(dependent),
            power: Power::new(res),
        };
        identify(&mut bus, &mut timer, &mut binding.power, &config).await?;
        binding.power.power_down();

        let mode = &SUPPORTED_MODES[0];
        info!("OV5670 probed, {}x{}", mode.width, mode.height);
        Ok(Self {
            ssdb,
            cldb,
            inner: Mutex::new(Inner {
                bus,
                timer,
                binding,
                config,
                mode,
                try_format: Format::from_mode(mode),
                controls: Controls::new(mode),
                streaming: false,
                pm_usage: 0,
            }),
        })
    }

    /// Unbinds the driver: stops the stream, releases every resource and returns the bus and
    /// timer.
    ///
    /// Dropping the driver releases the same resources but cannot stop the stream first.
    pub async fn remove(self) -> (I, D) {
        let mut inner = self.inner.into_inner();
        if inner.streaming {
            inner.stop_streaming().await;
            inner.streaming = false;
        }
        let Inner {
            bus,
            timer,
            binding,
            ..
        } = inner;
        drop(binding);
        debug!("OV5670 removed");
        (bus, timer)
    }

    pub fn ssdb(&self) -> &Ssdb {
        &self.ssdb
    }

    pub fn cldb(&self) -> &Cldb {
        &self.cldb
    }

    /// Mounting rotation in degrees.
    pub fn rotation(&self) -> u16 {
        self.ssdb.rotation()
    }

    pub async fn is_streaming(&self) -> bool {
        self.inner.lock().await.streaming
    }

    pub async fn is_powered(&self) -> bool {
        self.inner.lock().await.binding.power.is_on()
    }

    /// Starts or stops streaming. Asking for the current state does nothing.
    pub async fn set_stream(&self, enable: bool) -> Result<(), Error<I::Error>> {
        let mut inner = self.inner.lock().await;
        if inner.streaming == enable {
            return Ok(());
        }

        if enable {
            inner.pm_get().await?;
            if let Err(e) = inner.start_streaming().await {
                inner.stop_streaming().await;
                inner.pm_put();
                return Err(e);
            }
        } else {
            inner.stop_streaming().await;
            inner.pm_put();
        }

        inner.streaming = enable;
        Ok(())
    }

    /// Stops the stream for system sleep. The streaming flag is kept for [`Self::resume`].
    pub async fn suspend(&self) {
        let mut inner = self.inner.lock().await;
        if inner.streaming {
            inner.stop_streaming().await;
        }
    }

    /// Restarts a stream stopped by [`Self::suspend`].
    ///
    /// On failure the sensor is put back in standby but stays marked as streaming, still
    /// holding its usage reference until the stream is turned off.
    pub async fn resume(&self) -> Result<(), Error<I::Error>> {
        let mut inner = self.inner.lock().await;
        if inner.streaming {
            if let Err(e) = inner.start_streaming().await {
                inner.stop_streaming().await;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Powers the sensor up or down directly, without touching the usage count.
    ///
    /// Powering down is refused with [`Error::InvalidArgument`] while the sensor is in use.
    pub async fn set_power(&self, on: bool) -> Result<(), Error<I::Error>> {
        let mut inner = self.inner.lock().await;
        let inner = &mut *inner;
        if on {
            inner
                .binding
                .power
                .power_up(&mut inner.timer, inner.config.power_up_attempts)
                .await
        } else if inner.pm_usage > 0 {
            Err(Error::InvalidArgument)
        } else {
            inner.binding.power.power_down();
            Ok(())
        }
    }

    /// Opens a file handle: the try format starts out as the active one.
    pub async fn open(&self) {
        let mut inner = self.inner.lock().await;
        inner.try_format = Format::from_mode(inner.mode);
    }

    pub async fn enum_mbus_code(&self, index: u32) -> Result<u32, Error<I::Error>> {
        match index {
            0 => Ok(MEDIA_BUS_FMT_SGRBG10_1X10),
            _ => Err(Error::InvalidArgument),
        }
    }

    pub async fn enum_frame_size(
        &self,
        index: u32,
        code: u32,
    ) -> Result<FrameSize, Error<I::Error>> {
        if code != MEDIA_BUS_FMT_SGRBG10_1X10 {
            return Err(Error::InvalidArgument);
        }
        let mode = SUPPORTED_MODES
            .get(index as usize)
            .ok_or(Error::<I::Error>::InvalidArgument)?;
        Ok(FrameSize {
            min_width: mode.width,
            max_width: mode.width,
            min_height: mode.height,
            max_height: mode.height,
        })
    }

    pub async fn get_format(&self, which: FormatWhich) -> Format {
        let inner = self.inner.lock().await;
        match which {
            FormatWhich::Try => inner.try_format,
            FormatWhich::Active => Format::from_mode(inner.mode),
        }
    }

    /// Picks the mode nearest to `width` x `height` and returns its format.
    ///
    /// Setting the active format moves the control ranges to the new mode.
    pub async fn set_format(
        &self,
        which: FormatWhich,
        width: u32,
        height: u32,
    ) -> Result<Format, Error<I::Error>> {
        let mut inner = self.inner.lock().await;
        let mode = mode::select_mode(width, height);
        let format = Format::from_mode(mode);
        match which {
            FormatWhich::Try => inner.try_format = format,
            FormatWhich::Active => {
                debug!("Active mode {}x{}", mode.width, mode.height);
                inner.mode = mode;
                inner.controls.update_for_mode(mode);
                if inner.pm_usage > 0 {
                    inner.apply_control(ControlId::VerticalBlank).await?;
                    inner.apply_control(ControlId::Exposure).await?;
                }
            }
        }
        Ok(format)
    }

    pub async fn control(&self, id: ControlId) -> ControlInfo {
        self.inner.lock().await.controls.get(id)
    }

    /// Sets a control. The register is written only while the sensor is in use; otherwise the
    /// value is applied on the next stream start.
    pub async fn set_control(&self, id: ControlId, value: i64) -> Result<(), Error<I::Error>> {
        let mut inner = self.inner.lock().await;
        let exposure_clamped = inner.controls.set::<I::Error>(id, value)?;
        if inner.pm_usage == 0 {
            return Ok(());
        }
        // A shorter frame must not be programmed while the old exposure still exceeds it.
        if exposure_clamped {
            inner.apply_control(ControlId::Exposure).await?;
        }
        inner.apply_control(id).await
    }

    pub const fn skip_frames(&self) -> u32 {
        NUM_OF_SKIP_FRAMES
    }
}

fn read_descriptors<A: AcpiNamespace, E>(
    acpi: &A,
    sensor: A::Handle,
    dependent: Dev<A>,
) -> Result<(Ssdb, Cldb), Error<E>> {
    let mut raw = [0; Ssdb::SIZE];
    let len = acpi::read_blob::<_, E>(acpi, sensor, acpi::SSDB_METHOD, &mut raw)?;
    let ssdb = Ssdb::decode(&raw[..len]);
    ssdb.dump(&raw[..len]);

    let handle = acpi.acpi_handle(dependent).ok_or(Error::<E>::NotFound)?;
    let mut raw = [0; Cldb::SIZE];
    let len = acpi::read_blob::<_, E>(acpi, handle, acpi::CLDB_METHOD, &mut raw)?;
    let cldb = Cldb::decode(&raw[..len]);
    cldb.dump(&raw[..len]);

    Ok((ssdb, cldb))
}

/// Powers up and checks the chip id.
async fn identify<I, D, G, R, C>(
    bus: &mut I,
    timer: &mut D,
    power: &mut Power<G, R, C>,
    config: &Config,
) -> Result<(), Error<I::Error>>
where
    I: Interface,
    D: DelayNs,
    G: embedded_hal::digital::OutputPin,
    R: resources::Regulator,
    C: resources::Clock,
{
    power
        .power_up::<I::Error, _>(timer, config.power_up_attempts)
        .await?;
    let id = bus.read_reg(regs::CHIP_ID, 3).await?;
    if id != regs::CHIP_ID_VALUE {
        error!("Chip id mismatch: {:#x} != {:#x}", id, regs::CHIP_ID_VALUE);
        return Err(Error::ChipIdMismatch(id));
    }
    Ok(())
}

impl<I, D, A, P> Inner<I, D, A, P>
where
    I: Interface,
    D: DelayNs,
    A: AcpiNamespace,
    P: ResourceProvider<Dev<A>>,
{
    /// Takes a usage reference, powering up on the first one.
    async fn pm_get(&mut self) -> Result<(), Error<I::Error>> {
        self.pm_usage += 1;
        if self.pm_usage == 1 {
            if let Err(e) = self
                .binding
                .power
                .power_up(&mut self.timer, self.config.power_up_attempts)
                .await
            {
                self.pm_usage -= 1;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Drops a usage reference, powering down on the last one.
    fn pm_put(&mut self) {
        self.pm_usage = self.pm_usage.saturating_sub(1);
        if self.pm_usage == 0 {
            self.binding.power.power_down();
        }
    }

    async fn start_streaming(&mut self) -> Result<(), Error<I::Error>> {
        let reset = SoftwareReset::DEFAULT.with_reset(true);
        self.bus
            .write_reg(regs::SOFTWARE_RST, 1, reset.raw_value().into())
            .await
            .inspect_err(|_| error!("Failed to reset sensor"))?;

        self.bus
            .write_reg_list(self.mode.link_freq().regs)
            .await
            .inspect_err(|_| error!("Failed to set PLLs"))?;
        self.bus
            .write_reg_list(self.mode.regs)
            .await
            .inspect_err(|_| error!("Failed to set mode"))?;

        for id in ControlId::WRITABLE {
            self.apply_control(id).await?;
        }

        let streaming = ModeSelect::DEFAULT.with_streaming(true);
        self.bus
            .write_reg(regs::MODE_SELECT, 1, streaming.raw_value().into())
            .await
            .inspect_err(|_| error!("Failed to start streaming"))?;
        debug!("Streaming {}x{}", self.mode.width, self.mode.height);
        Ok(())
    }

    async fn stop_streaming(&mut self) {
        let standby = ModeSelect::DEFAULT.with_streaming(false);
        if self
            .bus
            .write_reg(regs::MODE_SELECT, 1, standby.raw_value().into())
            .await
            .is_err()
        {
            error!("Failed to stop streaming");
        }
    }

    /// Writes one control's current value to the sensor.
    async fn apply_control(&mut self, id: ControlId) -> Result<(), Error<I::Error>> {
        let value = self.controls.value(id);
        match id {
            ControlId::VerticalBlank => {
                self.bus.write_reg(regs::VTS, 2, self.controls.vts()).await
            }
            ControlId::AnalogueGain => {
                self.bus
                    .write_reg(regs::ANALOG_GAIN, 2, value as u32)
                    .await
            }
            ControlId::DigitalGain => {
                for reg in [regs::R_DGTL_GAIN, regs::G_DGTL_GAIN, regs::B_DGTL_GAIN] {
                    self.bus.write_reg(reg, 2, value as u32).await?;
                }
                Ok(())
            }
            ControlId::Exposure => {
                // The exposure range never exceeds VTS_MAX, well inside 20 bits.
                let exposure = Exposure::DEFAULT.with_lines(u20::new(value as u32));
                self.bus
                    .write_reg(regs::EXPOSURE, 3, exposure.raw_value())
                    .await
            }
            ControlId::TestPattern => {
                self.bus.write_reg(regs::TEST_PATTERN_CTRL, 1, 0).await?;
                let current = self.bus.read_reg(regs::TEST_PATTERN, 1).await?;
                let pattern = TestPattern::new_with_raw_value(current as u8).with_enable(value != 0);
                self.bus
                    .write_reg(regs::TEST_PATTERN, 1, pattern.raw_value().into())
                    .await
            }
            ControlId::LinkFreq | ControlId::PixelRate | ControlId::HorizontalBlank => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;
    use crate::mock::{Event, MockAcpi, MockDelay, MockI2c, MockObject, MockResources};

    const SENSOR_HANDLE: u32 = 1;
    const PMIC_HANDLE: u32 = 3;
    const SENSOR: u32 = 10;
    const PMIC: u32 = 30;

    type Driver = Ov5670<NoopRawMutex, Ov5670I2c<MockI2c>, MockDelay, MockAcpi, MockResources>;

    struct Harness {
        bus: MockI2c,
        delay: MockDelay,
        acpi: MockAcpi,
        provider: MockResources,
    }

    fn harness() -> Harness {
        let bus = MockI2c::new();
        bus.preload(regs::CHIP_ID, &[0x00, 0x56, 0x70]);

        let mut ssdb = vec![0u8; Ssdb::SIZE];
        ssdb[29] = 2;
        ssdb[84] = 1;
        ssdb[86..90].copy_from_slice(&19_200_000u32.to_le_bytes());
        let mut acpi = MockAcpi::new();
        acpi.bind(SENSOR, SENSOR_HANDLE);
        acpi.bind(PMIC, PMIC_HANDLE);
        acpi.method(SENSOR_HANDLE, "_DEP", MockObject::References(vec![PMIC_HANDLE]));
        acpi.method(SENSOR_HANDLE, "SSDB", MockObject::Buffer(ssdb));
        acpi.method(PMIC_HANDLE, "CLDB", MockObject::Buffer(vec![0x01, 0x02, 0x00, 0x20]));
        acpi.hid(PMIC_HANDLE, Some("INT3472"));

        Harness {
            bus,
            delay: MockDelay::default(),
            acpi,
            provider: MockResources::new(),
        }
    }

    fn probe(h: &Harness) -> Result<Driver, Error<embedded_hal::i2c::ErrorKind>> {
        block_on(Driver::probe_i2c(
            h.bus.clone(),
            DEFAULT_ADDRESS,
            h.delay.clone(),
            h.acpi.clone(),
            h.provider.clone(),
            SENSOR,
            Config::default(),
        ))
    }

    fn count_writes(bus: &MockI2c, address: u16) -> usize {
        bus.writes().iter().filter(|(a, _)| *a == address).count()
    }

    fn start_sequence_len(mode: &SupportedMode) -> usize {
        // reset, PLLs, mode, vblank, analog gain, 3 digital gains, exposure,
        // test pattern control and value, stream on
        1 + mode.link_freq().regs.len() + mode.regs.len() + 8 + 1
    }

    #[test]
    fn probe_reads_descriptors_and_powers_down() {
        let h = harness();
        let driver = probe(&h).unwrap();
        assert_eq!(driver.ssdb().lanes_used, 2);
        assert_eq!(driver.rotation(), 180);
        assert_eq!(driver.cldb().control_logic_type, types::ControlLogicType::Tps68470);
        assert!(!block_on(driver.is_powered()));
        assert!(!block_on(driver.is_streaming()));
        assert_eq!(h.acpi.refcount(PMIC), 1);
        assert_eq!(h.bus.state().last_address, Some(DEFAULT_ADDRESS));
        assert!(h.bus.writes().is_empty());
        assert_eq!(h.delay.total_ms(), 40);

        let active = block_on(driver.get_format(FormatWhich::Active));
        assert_eq!((active.width, active.height), (2592, 1944));
        assert_eq!(active.code, MEDIA_BUS_FMT_SGRBG10_1X10);
    }

    #[test]
    fn probe_rejects_unknown_chip_and_releases_everything() {
        let h = harness();
        h.bus.preload(regs::CHIP_ID, &[0x00, 0x56, 0x71]);
        let err = probe(&h).err().unwrap();
        assert!(matches!(err, Error::ChipIdMismatch(0x005671)));
        assert_eq!(h.acpi.refcount(PMIC), 0);

        let events = h.provider.events();
        let gets = events.iter().filter(|e| matches!(e, Event::Get(_))).count();
        let puts = events.iter().filter(|e| matches!(e, Event::Put(_))).count();
        assert_eq!(gets, puts);
        assert_eq!(events.last(), Some(&Event::Put("wiring.0".into())));
    }

    #[test]
    fn probe_without_dep_fails() {
        let mut h = harness();
        h.acpi = MockAcpi::new();
        h.acpi.bind(SENSOR, SENSOR_HANDLE);
        assert!(matches!(probe(&h), Err(Error::NoDependency)));
        assert!(h.provider.events().is_empty());
    }

    #[test]
    fn probe_without_ssdb_drops_dependent_reference() {
        let mut h = harness();
        h.acpi.method(SENSOR_HANDLE, "SSDB", MockObject::Integer(0));
        assert!(matches!(probe(&h), Err(Error::Format)));
        assert_eq!(h.acpi.refcount(PMIC), 0);
        assert!(h.provider.events().is_empty());
    }

    #[test]
    fn probe_fails_after_four_power_attempts() {
        let h = harness();
        h.provider.fail_enable("CORE", 4);
        assert!(matches!(
            probe(&h),
            Err(Error::ResourceUnavailable(Resource::Supply("CORE")))
        ));
        assert_eq!(h.bus.state().transactions, 0);
        assert_eq!(h.acpi.refcount(PMIC), 0);
    }

    #[test]
    fn stream_on_twice_starts_once() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        assert!(block_on(driver.is_streaming()));
        assert!(block_on(driver.is_powered()));
        assert_eq!(count_writes(&h.bus, regs::SOFTWARE_RST), 1);
        assert_eq!(h.bus.writes().len(), start_sequence_len(&SUPPORTED_MODES[0]));
        assert_eq!(h.bus.writes().last(), Some(&(regs::MODE_SELECT, vec![0x01])));
        assert_eq!(h.bus.writes()[0], (regs::SOFTWARE_RST, vec![0x01]));
    }

    #[test]
    fn stream_off_in_standby_writes_nothing() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_stream(false)).unwrap();
        assert!(h.bus.writes().is_empty());
        assert!(!block_on(driver.is_powered()));
    }

    #[test]
    fn stream_off_stops_and_powers_down() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        h.bus.clear_writes();
        block_on(driver.set_stream(false)).unwrap();
        assert_eq!(h.bus.writes(), vec![(regs::MODE_SELECT, vec![0x00])]);
        assert!(!block_on(driver.is_streaming()));
        assert!(!block_on(driver.is_powered()));
    }

    #[test]
    fn failed_start_forces_stop_and_powers_down() {
        let h = harness();
        let driver = probe(&h).unwrap();
        // Fail inside the mode register list.
        h.bus.fail_write_at(1 + SUPPORTED_MODES[0].link_freq().regs.len() + 5);
        let err = block_on(driver.set_stream(true)).unwrap_err();
        assert!(matches!(err, Error::ConfigurationAborted { .. }));
        assert!(!block_on(driver.is_streaming()));
        assert!(!block_on(driver.is_powered()));
        assert_eq!(h.bus.writes().last(), Some(&(regs::MODE_SELECT, vec![0x00])));

        // Recovers on the next attempt.
        h.bus.clear_writes();
        block_on(driver.set_stream(true)).unwrap();
        assert!(block_on(driver.is_streaming()));
    }

    #[test]
    fn stream_on_power_failure_keeps_standby() {
        let h = harness();
        let driver = probe(&h).unwrap();
        h.provider.fail_enable("tps68470-clk", 4);
        assert!(block_on(driver.set_stream(true)).is_err());
        assert!(h.bus.writes().is_empty());
        assert!(!block_on(driver.is_streaming()));

        // The failed attempt did not leak a usage reference.
        block_on(driver.set_stream(true)).unwrap();
        block_on(driver.set_stream(false)).unwrap();
        assert!(!block_on(driver.is_powered()));
    }

    #[test]
    fn stream_start_restores_controls() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_control(ControlId::AnalogueGain, 0x1ab)).unwrap();
        block_on(driver.set_control(ControlId::Exposure, 0x400)).unwrap();
        assert!(h.bus.writes().is_empty());

        block_on(driver.set_stream(true)).unwrap();
        let writes = h.bus.writes();
        assert!(writes.contains(&(regs::ANALOG_GAIN, vec![0x01, 0xab])));
        assert!(writes.contains(&(regs::EXPOSURE, vec![0x00, 0x40, 0x00])));
        assert!(writes.contains(&(regs::VTS, vec![0x08, 0x08])));
        assert!(writes.contains(&(regs::B_DGTL_GAIN, vec![0x04, 0x00])));
    }

    #[test]
    fn controls_written_while_streaming() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        h.bus.clear_writes();

        block_on(driver.set_control(ControlId::DigitalGain, 0x200)).unwrap();
        assert_eq!(
            h.bus.writes(),
            vec![
                (regs::R_DGTL_GAIN, vec![0x02, 0x00]),
                (regs::G_DGTL_GAIN, vec![0x02, 0x00]),
                (regs::B_DGTL_GAIN, vec![0x02, 0x00]),
            ]
        );

        h.bus.clear_writes();
        h.bus.preload(regs::TEST_PATTERN, &[0x41]);
        block_on(driver.set_control(ControlId::TestPattern, 1)).unwrap();
        assert_eq!(
            h.bus.writes(),
            vec![
                (regs::TEST_PATTERN_CTRL, vec![0x00]),
                (regs::TEST_PATTERN, vec![0x49]),
            ]
        );
    }

    #[test]
    fn shrinking_vblank_rewrites_exposure() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_format(FormatWhich::Active, 1296, 972)).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        h.bus.clear_writes();

        block_on(driver.set_control(ControlId::VerticalBlank, 996 - 972)).unwrap();
        let exposure = Exposure::DEFAULT.with_lines(u20::new(996 - 8)).raw_value();
        let expected = exposure.to_be_bytes()[1..].to_vec();
        assert_eq!(
            h.bus.writes(),
            vec![(regs::EXPOSURE, expected), (regs::VTS, vec![0x03, 0xe4])]
        );
    }

    #[test]
    fn bad_controls_are_rejected() {
        let h = harness();
        let driver = probe(&h).unwrap();
        assert!(matches!(
            block_on(driver.set_control(ControlId::PixelRate, 0)),
            Err(Error::ReadOnly)
        ));
        assert!(matches!(
            block_on(driver.set_control(ControlId::AnalogueGain, 8192)),
            Err(Error::OutOfRange)
        ));
        assert_eq!(block_on(driver.control(ControlId::AnalogueGain)).value, 128);
    }

    #[test]
    fn try_format_leaves_active_mode_alone() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.open());
        let format = block_on(driver.set_format(FormatWhich::Try, 1300, 1000)).unwrap();
        assert_eq!((format.width, format.height), (1296, 972));
        assert_eq!(block_on(driver.get_format(FormatWhich::Try)), format);
        let active = block_on(driver.get_format(FormatWhich::Active));
        assert_eq!(active.width, 2592);
        assert_eq!(
            block_on(driver.control(ControlId::HorizontalBlank)).value,
            2724 - 2592
        );

        block_on(driver.set_format(FormatWhich::Active, 640, 400)).unwrap();
        let active = block_on(driver.get_format(FormatWhich::Active));
        assert_eq!((active.width, active.height), (640, 360));
        assert_eq!(block_on(driver.control(ControlId::VerticalBlank)).value, 0x808 - 360);
        assert!(h.bus.writes().is_empty());

        block_on(driver.open());
        assert_eq!(block_on(driver.get_format(FormatWhich::Try)).width, 640);
    }

    #[test]
    fn enumerates_codes_and_sizes() {
        let h = harness();
        let driver = probe(&h).unwrap();
        assert_eq!(block_on(driver.enum_mbus_code(0)).unwrap(), 0x300a);
        assert!(matches!(
            block_on(driver.enum_mbus_code(1)),
            Err(Error::InvalidArgument)
        ));
        let size = block_on(driver.enum_frame_size(5, MEDIA_BUS_FMT_SGRBG10_1X10)).unwrap();
        assert_eq!((size.min_width, size.max_height), (640, 360));
        assert!(block_on(driver.enum_frame_size(6, MEDIA_BUS_FMT_SGRBG10_1X10)).is_err());
        assert!(block_on(driver.enum_frame_size(0, 0x3007)).is_err());
        assert_eq!(driver.skip_frames(), 2);
    }

    #[test]
    fn suspend_and_resume_restart_the_stream() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.suspend());
        block_on(driver.resume()).unwrap();
        assert!(h.bus.writes().is_empty());

        block_on(driver.set_stream(true)).unwrap();
        h.bus.clear_writes();
        block_on(driver.suspend());
        assert_eq!(h.bus.writes(), vec![(regs::MODE_SELECT, vec![0x00])]);
        assert!(block_on(driver.is_streaming()));

        h.bus.clear_writes();
        block_on(driver.resume()).unwrap();
        assert_eq!(count_writes(&h.bus, regs::SOFTWARE_RST), 1);
        assert_eq!(h.bus.writes().last(), Some(&(regs::MODE_SELECT, vec![0x01])));
    }

    #[test]
    fn failed_resume_forces_standby() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        block_on(driver.suspend());
        h.bus.fail_write_at(0);
        h.bus.clear_writes();
        assert!(block_on(driver.resume()).is_err());
        assert_eq!(h.bus.writes(), vec![(regs::MODE_SELECT, vec![0x00])]);
        assert!(block_on(driver.is_streaming()));

        block_on(driver.set_stream(false)).unwrap();
        assert!(!block_on(driver.is_powered()));
    }

    #[test]
    fn explicit_power_control() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_power(true)).unwrap();
        assert!(block_on(driver.is_powered()));
        block_on(driver.set_power(false)).unwrap();
        assert!(!block_on(driver.is_powered()));

        block_on(driver.set_stream(true)).unwrap();
        assert!(matches!(
            block_on(driver.set_power(false)),
            Err(Error::InvalidArgument)
        ));
        assert!(block_on(driver.is_powered()));
        block_on(driver.set_stream(false)).unwrap();
        assert!(!block_on(driver.is_powered()));
    }

    #[test]
    fn remove_releases_everything() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        h.bus.clear_writes();

        let (bus, _timer) = block_on(driver.remove());
        assert_eq!(h.bus.writes(), vec![(regs::MODE_SELECT, vec![0x00])]);
        assert_eq!(h.acpi.refcount(PMIC), 0);
        let events = h.provider.events();
        assert_eq!(events.last(), Some(&Event::Put("wiring.0".into())));
        assert!(events.contains(&Event::Disable("tps68470-clk".into())));
        assert_eq!(bus.release().state().transactions, h.bus.state().transactions);
    }

    #[test]
    fn dropping_a_streaming_driver_releases_everything() {
        let h = harness();
        let driver = probe(&h).unwrap();
        block_on(driver.set_stream(true)).unwrap();
        assert_eq!(h.acpi.refcount(PMIC), 1);
        let before = h.provider.events().len();

        drop(driver);
        assert_eq!(h.acpi.refcount(PMIC), 0);
        let all = h.provider.events();
        let released = &all[before..];
        assert_eq!(released.first(), Some(&Event::Disable("tps68470-clk".into())));
        assert_eq!(released.last(), Some(&Event::Put("wiring.0".into())));

        let count = |f: fn(&Event) -> bool| all.iter().filter(|e| f(e)).count();
        assert_eq!(
            count(|e| matches!(e, Event::Get(_))),
            count(|e| matches!(e, Event::Put(_)))
        );
        assert_eq!(
            count(|e| matches!(e, Event::Enable(_))),
            count(|e| matches!(e, Event::Disable(_)))
        );
    }
}
