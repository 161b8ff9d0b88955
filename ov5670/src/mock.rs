//! Recording test doubles for the bus, the delay and the platform.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, ErrorKind};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, Operation};

use crate::acpi::{AcpiNamespace, AcpiObject, AcpiStatus};
use crate::resources::{Clock, GpioLookup, Regulator, ResourceProvider};

/// Register file and traffic log behind a [`MockI2c`].
#[derive(Debug, Default)]
pub struct MockI2cState {
    pub regs: HashMap<u16, u8>,
    writes: Vec<(u16, Vec<u8>)>,
    pub last_address: Option<u8>,
    pub transactions: usize,
    pub attempted_writes: usize,
    pub fail_reads: bool,
    fail_write_at: Option<usize>,
}

/// I2C bus with a 16-bit addressed register file. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockI2c {
    state: Rc<RefCell<MockI2cState>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(&self, address: u16, bytes: &[u8]) {
        let mut state = self.state.borrow_mut();
        for (i, &b) in bytes.iter().enumerate() {
            state.regs.insert(address + i as u16, b);
        }
    }

    pub fn state(&self) -> Ref<'_, MockI2cState> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, MockI2cState> {
        self.state.borrow_mut()
    }

    /// Successful writes, as (register, data bytes).
    pub fn writes(&self) -> Vec<(u16, Vec<u8>)> {
        self.state.borrow().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.state.borrow_mut().writes.clear();
    }

    /// Fails the `n`th write attempt from now, counted from zero.
    pub fn fail_write_at(&self, n: usize) {
        let mut state = self.state.borrow_mut();
        state.fail_write_at = Some(state.attempted_writes + n);
    }

    pub fn reg(&self, address: u16) -> u8 {
        self.state.borrow().regs.get(&address).copied().unwrap_or(0)
    }
}

impl i2c::ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.last_address = Some(address);
        state.transactions += 1;
        match operations {
            [Operation::Write(reg), Operation::Read(data)] if reg.len() == 2 => {
                if state.fail_reads {
                    return Err(ErrorKind::Other);
                }
                let reg = u16::from_be_bytes([reg[0], reg[1]]);
                for (i, b) in data.iter_mut().enumerate() {
                    *b = state.regs.get(&(reg + i as u16)).copied().unwrap_or(0);
                }
                Ok(())
            }
            [Operation::Write(bytes)] if bytes.len() > 2 => {
                let attempt = state.attempted_writes;
                state.attempted_writes += 1;
                if state.fail_write_at == Some(attempt) {
                    return Err(ErrorKind::Other);
                }
                let reg = u16::from_be_bytes([bytes[0], bytes[1]]);
                for (i, &b) in bytes[2..].iter().enumerate() {
                    state.regs.insert(reg + i as u16, b);
                }
                state.writes.push((reg, bytes[2..].to_vec()));
                Ok(())
            }
            _ => Err(ErrorKind::Other),
        }
    }
}

/// Delay that returns immediately and accumulates the requested time. Clones share the total.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    total_ns: Rc<Cell<u64>>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns.get() / 1_000_000
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + u64::from(ns));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MockObject {
    Integer(u64),
    String(String),
    Buffer(Vec<u8>),
    References(Vec<u32>),
}

/// ACPI namespace with `u32` handles and devices. Reference counts are shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MockAcpi {
    methods: HashMap<(u32, String), MockObject>,
    hids: HashMap<u32, Option<String>>,
    /// (device, firmware node), in bus order
    bindings: Vec<(u32, u32)>,
    refcounts: Rc<RefCell<HashMap<u32, i32>>>,
}

impl MockAcpi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&mut self, handle: u32, name: &str, object: MockObject) {
        self.methods.insert((handle, name.to_string()), object);
    }

    pub fn hid(&mut self, handle: u32, hid: Option<&str>) {
        self.hids.insert(handle, hid.map(str::to_string));
    }

    pub fn bind(&mut self, device: u32, handle: u32) {
        self.bindings.push((device, handle));
    }

    pub fn refcount(&self, device: u32) -> i32 {
        self.refcounts.borrow().get(&device).copied().unwrap_or(0)
    }
}

impl AcpiNamespace for MockAcpi {
    type Handle = u32;
    type Device = u32;

    fn has_method(&self, handle: u32, method: &str) -> bool {
        self.methods.contains_key(&(handle, method.to_string()))
    }

    fn evaluate(&self, handle: u32, method: &str) -> Result<AcpiObject<'_, u32>, AcpiStatus> {
        match self.methods.get(&(handle, method.to_string())) {
            Some(MockObject::Integer(v)) => Ok(AcpiObject::Integer(*v)),
            Some(MockObject::String(s)) => Ok(AcpiObject::String(s)),
            Some(MockObject::Buffer(b)) => Ok(AcpiObject::Buffer(b)),
            Some(MockObject::References(r)) => Ok(AcpiObject::References(r)),
            // AE_NOT_FOUND
            None => Err(AcpiStatus(0x0005)),
        }
    }

    fn hardware_id(&self, handle: u32) -> Result<Option<&str>, AcpiStatus> {
        self.hids
            .get(&handle)
            .map(Option::as_deref)
            .ok_or(AcpiStatus(0x0005))
    }

    fn bus_find_device(&self, matches: &mut dyn FnMut(u32) -> bool) -> Option<u32> {
        self.bindings
            .iter()
            .map(|&(device, _)| device)
            .find(|&device| matches(device))
    }

    fn fwnode(&self, device: u32) -> Option<u32> {
        self.bindings
            .iter()
            .find(|&&(d, _)| d == device)
            .map(|&(_, handle)| handle)
    }

    fn get_device(&mut self, device: u32) {
        *self.refcounts.borrow_mut().entry(device).or_default() += 1;
    }

    fn put_device(&mut self, device: u32) {
        *self.refcounts.borrow_mut().entry(device).or_default() -= 1;
    }
}

/// Everything the platform was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Get(String),
    Put(String),
    Set(String, bool),
    Enable(String),
    Disable(String),
    SetRate(u32),
}

#[derive(Debug, Default)]
struct ResState {
    events: Vec<Event>,
    fail_get: Option<String>,
    enable_failures: HashMap<String, u32>,
    owners: HashMap<String, u32>,
    lookup_registered: bool,
    rate: u32,
    fail_set_rate: bool,
    actual_rate: Option<u32>,
}

impl ResState {
    fn take_failure(&mut self, name: &str) -> bool {
        match self.enable_failures.get_mut(name) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Resource provider recording every call as an [`Event`]. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockResources {
    state: Rc<RefCell<ResState>>,
}

impl MockResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }

    /// Makes fetching the named resource fail.
    pub fn fail_get(&self, name: &str) {
        self.state.borrow_mut().fail_get = Some(name.to_string());
    }

    /// Makes the next `times` enables (or GPIO raises) of the named resource fail.
    pub fn fail_enable(&self, name: &str, times: u32) {
        self.state
            .borrow_mut()
            .enable_failures
            .insert(name.to_string(), times);
    }

    pub fn fail_set_rate(&self) {
        self.state.borrow_mut().fail_set_rate = true;
    }

    pub fn set_actual_rate(&self, hz: u32) {
        self.state.borrow_mut().actual_rate = Some(hz);
    }

    /// Device the named resource was fetched for.
    pub fn owner(&self, name: &str) -> Option<u32> {
        self.state.borrow().owners.get(name).copied()
    }

    fn get(&mut self, device: u32, name: &str) -> Result<String, ()> {
        let mut state = self.state.borrow_mut();
        if state.fail_get.as_deref() == Some(name) {
            return Err(());
        }
        state.events.push(Event::Get(name.to_string()));
        state.owners.insert(name.to_string(), device);
        Ok(name.to_string())
    }

    fn put(&mut self, name: &str) {
        self.state
            .borrow_mut()
            .events
            .push(Event::Put(name.to_string()));
    }
}

#[derive(Debug)]
pub struct MockGpio {
    name: String,
    state: Rc<RefCell<ResState>>,
}

impl digital::ErrorType for MockGpio {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockGpio {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Set(self.name.clone(), true));
        if state.take_failure(&self.name) {
            return Err(digital::ErrorKind::Other);
        }
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Set(self.name.clone(), false));
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockRegulator {
    name: String,
    state: Rc<RefCell<ResState>>,
}

impl Regulator for MockRegulator {
    type Error = ();

    fn enable(&mut self) -> Result<(), ()> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Enable(self.name.clone()));
        if state.take_failure(&self.name) {
            return Err(());
        }
        Ok(())
    }

    fn disable(&mut self) -> Result<(), ()> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Disable(self.name.clone()));
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockClock {
    name: String,
    state: Rc<RefCell<ResState>>,
}

impl Clock for MockClock {
    type Error = ();

    fn set_rate(&mut self, hz: u32) -> Result<(), ()> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::SetRate(hz));
        if state.fail_set_rate {
            return Err(());
        }
        state.rate = hz;
        Ok(())
    }

    fn rate(&self) -> u32 {
        let state = self.state.borrow();
        state.actual_rate.unwrap_or(state.rate)
    }

    fn prepare_enable(&mut self) -> Result<(), ()> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Enable(self.name.clone()));
        if state.take_failure(&self.name) {
            return Err(());
        }
        Ok(())
    }

    fn disable_unprepare(&mut self) {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Disable(self.name.clone()));
    }
}

impl ResourceProvider<u32> for MockResources {
    type Gpio = MockGpio;
    type Regulator = MockRegulator;
    type Clock = MockClock;
    type Error = ();

    fn gpio_get_index(&mut self, device: u32, index: u8) -> Result<MockGpio, ()> {
        let name = self.get(device, &format!("wiring.{index}"))?;
        Ok(MockGpio {
            name,
            state: self.state.clone(),
        })
    }

    fn gpio_get(&mut self, device: u32, con_id: &'static str) -> Result<MockGpio, ()> {
        if !self.state.borrow().lookup_registered {
            return Err(());
        }
        let name = self.get(device, con_id)?;
        Ok(MockGpio {
            name,
            state: self.state.clone(),
        })
    }

    fn gpio_put(&mut self, gpio: MockGpio) {
        self.put(&gpio.name);
    }

    fn add_lookup_table(&mut self, device: u32, table: &'static [GpioLookup]) -> Result<(), ()> {
        assert!(!table.is_empty());
        self.get(device, "lookup")?;
        self.state.borrow_mut().lookup_registered = true;
        Ok(())
    }

    fn remove_lookup_table(&mut self, _device: u32, _table: &'static [GpioLookup]) {
        self.put("lookup");
        self.state.borrow_mut().lookup_registered = false;
    }

    fn regulator_get(&mut self, device: u32, supply: &'static str) -> Result<MockRegulator, ()> {
        let name = self.get(device, supply)?;
        Ok(MockRegulator {
            name,
            state: self.state.clone(),
        })
    }

    fn regulator_put(&mut self, regulator: MockRegulator) {
        self.put(&regulator.name);
    }

    fn clk_get(&mut self, device: u32, name: &'static str) -> Result<MockClock, ()> {
        let name = self.get(device, name)?;
        Ok(MockClock {
            name,
            state: self.state.clone(),
        })
    }

    fn clk_put(&mut self, clock: MockClock) {
        self.put(&clock.name);
    }
}
