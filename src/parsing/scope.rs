/// Stack of indentation widths for the blocks currently open. An empty
/// stack is the top level, at width zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scope {
    stack: Vec<usize>,
}

impl Scope {
    pub(crate) fn new() -> Scope {
        Scope { stack: vec![] }
    }

    pub(crate) fn current(&self) -> usize {
        match self
            .stack
            .last()
        {
            Some(width) => *width,
            None => 0,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack
            .len()
    }

    pub(crate) fn push(&mut self, width: usize) {
        self.stack
            .push(width);
    }

    pub(crate) fn pop(&mut self) -> usize {
        match self
            .stack
            .pop()
        {
            Some(width) => width,
            None => 0,
        }
    }
}
