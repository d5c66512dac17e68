#![deny(warnings)]

// Lookahead over a token source. Whatever was read since the last `ignore`
// stays buffered, so a rejected `accept_if` rewinds without losing input.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        if self.pos as usize >= self.buf.len() {
            self.pos = self.buf.len() as isize;
            if let Some(item) = self.src.next() {
                self.buf.push(item);
            }
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn pos(&self) -> isize { self.pos }

    // -1 is before the first buffered item, buf.len() is past the last one
    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // commit everything read so far
    pub fn ignore(&mut self) {
        let n = ((self.pos + 1).max(0) as usize).min(self.buf.len());
        self.buf.drain(..n);
        self.pos = -1;
    }

    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
    where F: Fn(&I::Item) -> bool {
        let backtrack = self.pos();
        match self.next() {
            Some(next) if pred(&next) => Some(next),
            _ => {
                self.set_pos(backtrack);
                None
            }
        }
    }

    // returns whether anything was skipped
    pub fn skip_matching<F>(&mut self, pred: F) -> bool
    where F: Fn(&I::Item) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|item| any.contains(item))
    }
}
