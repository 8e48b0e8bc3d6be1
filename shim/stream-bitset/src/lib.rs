pub mod bitset {
    use std::marker::PhantomData;

    #[derive(Clone)]
    pub struct BitSetImpl<I> {
        bits: Vec<bool>,
        card: u64,
        _pd: PhantomData<I>,
    }

    impl BitSetImpl<u32> {
        pub fn new(n: u32) -> Self {
            Self { bits: vec![false; n as usize], card: 0, _pd: PhantomData }
        }

        pub fn set_bit(&mut self, i: u32) -> bool {
            let old = self.bits[i as usize];
            if !old {
                self.bits[i as usize] = true;
                self.card += 1;
            }
            old
        }

        pub fn clear_bit(&mut self, i: u32) -> bool {
            let old = self.bits[i as usize];
            if old {
                self.bits[i as usize] = false;
                self.card -= 1;
            }
            old
        }

        pub fn get_bit(&self, i: u32) -> bool {
            self.bits[i as usize]
        }

        pub fn clear_all(&mut self) {
            self.bits.iter_mut().for_each(|b| *b = false);
            self.card = 0;
        }

        pub fn cardinality(&self) -> u64 {
            self.card
        }
    }
}
