macro_rules! impl_mods {
    ($func_name:ident, $const_name:ident) => {
        #[inline]
        fn $func_name(self) -> bool {
            self & Self::$const_name > 0
        }
    };
}

/// Legacy bit values of mods and checks on them.
///
/// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
pub trait Mods: Copy {
    const NF: u32 = 1 << 0;
    const EZ: u32 = 1 << 1;
    const TD: u32 = 1 << 2;
    const HD: u32 = 1 << 3;
    const HR: u32 = 1 << 4;
    const SD: u32 = 1 << 5;
    const DT: u32 = 1 << 6;
    const HT: u32 = 1 << 8;
    const NC: u32 = 1 << 9;
    const FL: u32 = 1 << 10;
    const SO: u32 = 1 << 12;

    /// Mods that the Training mod can't be combined with.
    ///
    /// Training controls both speed and difficulty attributes by itself so
    /// any mod that adjusts either is excluded.
    const TRAINING_INCOMPATIBLE: u32 = Self::EZ | Self::HR | Self::DT | Self::NC | Self::HT;

    /// Whether the mods change the clock rate.
    fn change_speed(self) -> bool;

    /// Whether the mods change difficulty attributes.
    fn change_map(self) -> bool;

    /// Bits of all contained mods that conflict with the Training mod.
    fn training_conflicts(self) -> u32;

    fn ez(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn ht(self) -> bool;
    fn nc(self) -> bool;
}

impl Mods for u32 {
    #[inline]
    fn change_speed(self) -> bool {
        self & (Self::HT | Self::DT | Self::NC) > 0
    }

    #[inline]
    fn change_map(self) -> bool {
        self & (Self::HR | Self::EZ) > 0
    }

    #[inline]
    fn training_conflicts(self) -> u32 {
        self & Self::TRAINING_INCOMPATIBLE
    }

    impl_mods!(ez, EZ);
    impl_mods!(hr, HR);
    impl_mods!(dt, DT);
    impl_mods!(ht, HT);
    impl_mods!(nc, NC);
}

#[cfg(test)]
mod tests {
    use super::Mods;

    #[test]
    fn conflicts() {
        let hdhr = u32::HD | u32::HR;
        assert!(hdhr.hr());
        assert!(hdhr.change_map());
        assert_eq!(hdhr.training_conflicts(), u32::HR);

        let hdfl = u32::HD | u32::FL;
        assert_eq!(hdfl.training_conflicts(), 0);

        let nc = u32::NC | u32::DT;
        assert!(nc.nc() && nc.dt() && !nc.ht() && !nc.ez());
        assert!(nc.change_speed());
    }
}
